//! Table view - sort and search over a rendered table.
//!
//! The TableView provides:
//! - Click-to-sort on columns whose header carries `data-sortable`
//! - Locale-aware comparison (Arabic collation by default)
//! - Case-insensitive substring search over the full row text
//! - Debounced search for keystroke-driven input
//!
//! Rows are read once from the rendered page when the view binds. After that
//! the view only reorders and shows/hides them; row content never changes.
//!
//! # Example
//!
//! ```ignore
//! use dashkit::prelude::*;
//!
//! let view = TableView::bind(&doc, "usersTable", TableOptions::default());
//! view.sort(0);
//! view.search_debounced("ahmad");
//! // ...after the quiet window
//! view.render(&mut doc);
//! ```

mod collation;
mod column;
mod events;
mod options;
mod render;
mod row;
mod state;

pub use collation::Collation;
pub use column::{Column, SortDirection};
pub use options::{DEFAULT_SEARCH_DEBOUNCE, DEFAULT_SEARCH_INPUT_ID, TableOptions};
pub use row::Row;
pub use state::TableView;
