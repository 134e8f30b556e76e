//! Table view state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use dashdom::{Document, Element, Tag};
use log::debug;

use super::collation::Collation;
use super::column::{Column, SortDirection};
use super::options::TableOptions;
use super::row::Row;
use crate::debounce::Debouncer;

/// Internal state for the TableView.
#[derive(Debug, Default)]
pub(super) struct TableInner {
    /// Columns, in header order.
    pub columns: Vec<Column>,
    /// Rows, in current display order.
    pub rows: Vec<Row>,
    /// Id of the `<tbody>` that owns the row elements.
    pub body_id: Option<String>,
    /// Last applied search term.
    pub term: String,
}

/// Sort and search controller for one rendered table.
///
/// `TableView` is cheap to clone; clones share state, so a clone moved into a
/// debounced callback updates the same view. A view bound to a table that is
/// not on the page has no rows, and every operation on it is a no-op.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Id of the bound `<table>` element.
    table_id: String,
    options: TableOptions,
    /// Sort comparator, built once for `options.locale`.
    collation: Arc<Collation>,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
    /// Pending debounced search.
    search_debounce: Debouncer,
}

impl TableView {
    /// Bind to the table with id `table_id` in a rendered page.
    ///
    /// Columns come from the header row; a header cell with `data-sortable`
    /// marks its column sortable. Rows come from the first `<tbody>`.
    pub fn bind(doc: &Document, table_id: &str, options: TableOptions) -> Self {
        let Some(table) = doc.get(table_id) else {
            debug!("Table {table_id:?} not on page, view is inert");
            return Self::from_parts(table_id, options, TableInner::default());
        };

        let inner = read_table(table);
        // Rows rendered hidden are out of sync with the empty search term.
        let stale = inner
            .body_id
            .as_deref()
            .and_then(|id| doc.get(id))
            .is_some_and(|body| body.child_elements().iter().any(|r| r.hidden));
        debug!(
            "Bound table {table_id:?}: {} columns, {} rows",
            inner.columns.len(),
            inner.rows.len()
        );

        let view = Self::from_parts(table_id, options, inner);
        view.dirty.store(stale, Ordering::SeqCst);
        view
    }

    /// Build a view directly from columns and rows, without a rendered page.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Row>, options: TableOptions) -> Self {
        let inner = TableInner {
            columns,
            rows,
            ..Default::default()
        };
        Self::from_parts("", options, inner)
    }

    fn from_parts(table_id: &str, options: TableOptions, inner: TableInner) -> Self {
        Self {
            table_id: table_id.to_string(),
            search_debounce: Debouncer::new(options.debounce),
            collation: Arc::new(Collation::new(&options.locale)),
            options,
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Sort rows by the text of `column`.
    ///
    /// An ascending column flips to descending, any other column sorts
    /// ascending and every other column is reset. Non-sortable or unknown
    /// columns are ignored. Order among equal keys is unspecified.
    pub fn sort(&self, column: usize) {
        if !self.options.sortable {
            return;
        }
        let Ok(mut guard) = self.inner.write() else {
            return;
        };

        let Some(current) = guard
            .columns
            .iter()
            .find(|c| c.index == column && c.sortable)
            .map(|c| c.sort)
        else {
            debug!("Column {column} of {:?} is not sortable", self.table_id);
            return;
        };
        let direction = current.next();

        guard.rows.sort_by(|a, b| {
            let ord = self.collation.compare(a.cell(column), b.cell(column));
            match direction {
                SortDirection::Descending => ord.reverse(),
                _ => ord,
            }
        });

        for col in &mut guard.columns {
            col.sort = if col.index == column {
                direction
            } else {
                SortDirection::None
            };
        }

        self.dirty.store(true, Ordering::SeqCst);
        debug!("Sorted {:?} by column {column} ({direction:?})", self.table_id);
    }

    /// Show rows whose text contains `term`, ignoring case; hide the rest.
    ///
    /// Row order is left alone. An empty term shows every row.
    pub fn search(&self, term: &str) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };

        let folded = term.to_lowercase();
        for row in &mut guard.rows {
            row.visible = row.matches(&folded);
            if row.visible {
                row.revealed = true;
            }
        }
        guard.term = term.to_string();

        self.dirty.store(true, Ordering::SeqCst);
        debug!("Searched {:?} for {term:?}", self.table_id);
    }

    /// Search after the quiet window, replacing any search still waiting.
    ///
    /// Outside a tokio runtime there is nothing to wait on and every call
    /// searches immediately, so N calls mean N scans.
    pub fn search_debounced(&self, term: impl Into<String>) {
        if !self.options.searchable {
            return;
        }
        let term = term.into();
        let view = self.clone();
        self.search_debounce.call(move || view.search(&term));
    }

    /// Whether a debounced search has not run yet.
    pub fn search_pending(&self) -> bool {
        self.search_debounce.is_pending()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn columns(&self) -> Vec<Column> {
        self.inner.read().map(|g| g.columns.clone()).unwrap_or_default()
    }

    /// Rows in display order, hidden ones included.
    pub fn rows(&self) -> Vec<Row> {
        self.inner.read().map(|g| g.rows.clone()).unwrap_or_default()
    }

    /// Ids of the visible rows, in display order.
    pub fn visible_row_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| {
                g.rows
                    .iter()
                    .filter(|r| r.visible)
                    .map(|r| r.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Text of `column` for every row, in display order.
    pub fn column_values(&self, column: usize) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.rows.iter().map(|r| r.cell(column).to_string()).collect())
            .unwrap_or_default()
    }

    /// Sort state of `column`.
    pub fn sort_direction(&self, column: usize) -> SortDirection {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.columns.iter().find(|c| c.index == column).map(|c| c.sort))
            .unwrap_or_default()
    }

    /// The sorted column and its direction, if any.
    pub fn sorted_by(&self) -> Option<(usize, SortDirection)> {
        self.inner.read().ok().and_then(|g| {
            g.columns
                .iter()
                .find(|c| c.sort.is_sorted())
                .map(|c| (c.index, c.sort))
        })
    }

    /// The last applied search term.
    pub fn search_term(&self) -> String {
        self.inner.read().map(|g| g.term.clone()).unwrap_or_default()
    }

    /// Check if the view changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }
}

/// Read columns and rows out of a `<table>` element.
fn read_table(table: &Element) -> TableInner {
    let mut inner = TableInner::default();

    for section in table.child_elements() {
        match section.tag {
            Tag::THead if inner.columns.is_empty() => {
                if let Some(header_row) = section.child_elements().iter().find(|e| e.tag == Tag::Tr) {
                    inner.columns = read_columns(header_row);
                }
            }
            Tag::TBody if inner.body_id.is_none() => {
                inner.body_id = Some(section.id.clone());
                inner.rows = section
                    .child_elements()
                    .iter()
                    .filter(|e| e.tag == Tag::Tr)
                    .map(Row::from_element)
                    .collect();
            }
            _ => {}
        }
    }

    inner
}

fn read_columns(header_row: &Element) -> Vec<Column> {
    header_row
        .child_elements()
        .iter()
        .filter(|c| c.tag.is_cell())
        .enumerate()
        .map(|(index, cell)| {
            let column = Column::new(index, cell.text_content().trim()).header_id(&cell.id);
            if cell.has_attr("data-sortable") {
                column.sortable()
            } else {
                column
            }
        })
        .collect()
}
