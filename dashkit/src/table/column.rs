//! Column metadata and sort state.

/// Sort state of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction applied by the next click on this column.
    ///
    /// Only an ascending column flips to descending; anything else sorts
    /// ascending.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::None | SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header class that renders this state.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some("sort-asc"),
            SortDirection::Descending => Some("sort-desc"),
        }
    }

    pub fn is_sorted(self) -> bool {
        self != SortDirection::None
    }
}

/// A column of a bound table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Cell index within each row.
    pub index: usize,
    /// Id of the header cell, if the table has one for this column.
    pub header_id: Option<String>,
    /// Header text.
    pub label: String,
    /// Whether the header carries `data-sortable`.
    pub sortable: bool,
    /// Current sort state.
    pub sort: SortDirection,
}

impl Column {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            header_id: None,
            label: label.into(),
            sortable: false,
            sort: SortDirection::None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn header_id(mut self, id: impl Into<String>) -> Self {
        self.header_id = Some(id.into());
        self
    }
}
