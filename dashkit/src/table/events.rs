//! Event handling for the TableView.

use log::trace;

use super::state::TableView;

impl TableView {
    /// Handle a click on the header cell with id `header_id`.
    ///
    /// Returns `true` when the click sorted the table.
    pub fn on_header_click(&self, header_id: &str) -> bool {
        let column = self.inner.read().ok().and_then(|g| {
            g.columns
                .iter()
                .find(|c| c.sortable && c.header_id.as_deref() == Some(header_id))
                .map(|c| c.index)
        });

        let Some(column) = column else {
            trace!("Header {header_id:?} is not a sortable column");
            return false;
        };

        self.sort(column);
        true
    }

    /// Handle a key release in the text field `input_id` holding `value`.
    ///
    /// Only the configured search input triggers a (debounced) search.
    /// Returns `true` when a search was scheduled.
    pub fn on_input(&self, input_id: &str, value: &str) -> bool {
        if !self.options().searchable || input_id != self.options().search_input_id {
            return false;
        }
        self.search_debounced(value);
        true
    }
}
