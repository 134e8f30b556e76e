use std::time::Duration;

/// Search input bound when no id is configured.
pub const DEFAULT_SEARCH_INPUT_ID: &str = "searchInput";

/// Quiet window for keystroke-driven search.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Table view configuration.
///
/// # Examples
///
/// ```ignore
/// let options = TableOptions::default()
///     .search_input_id("ordersSearch")
///     .debounce(Duration::from_millis(150));
/// ```
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Enable header-click sorting.
    pub sortable: bool,
    /// Enable search.
    pub searchable: bool,
    /// Id of the text field that drives search.
    pub search_input_id: String,
    /// Quiet window for debounced search.
    pub debounce: Duration,
    /// BCP-47 locale for sort collation.
    pub locale: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            searchable: true,
            search_input_id: DEFAULT_SEARCH_INPUT_ID.to_string(),
            debounce: DEFAULT_SEARCH_DEBOUNCE,
            locale: "ar".to_string(),
        }
    }
}

impl TableOptions {
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn search_input_id(mut self, id: impl Into<String>) -> Self {
        self.search_input_id = id.into();
        self
    }

    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
