//! Projection of the table view onto the rendered page.

use std::collections::HashMap;
use std::sync::atomic::Ordering;

use dashdom::{Document, Element};
use log::debug;

use super::state::TableView;

/// Entry animation stagger between consecutive rows, in milliseconds.
pub const ROW_STAGGER_MS: u64 = 30;

const SORT_CLASSES: [&str; 2] = ["sort-asc", "sort-desc"];

impl TableView {
    /// Write the current order, visibility and sort markers into `doc`.
    ///
    /// Row elements are moved, never rebuilt. Children of the `<tbody>` that
    /// the view does not know about keep their relative order after the
    /// known rows. Clears the dirty flag.
    pub fn render(&self, doc: &mut Document) {
        let Ok(guard) = self.inner.read() else {
            return;
        };

        for column in &guard.columns {
            let Some(header) = column.header_id.as_deref().and_then(|id| doc.get_mut(id)) else {
                continue;
            };
            for class in SORT_CLASSES {
                header.remove_class(class);
            }
            if let Some(class) = column.sort.css_class() {
                header.add_class(class);
            }
        }

        let Some(body) = guard.body_id.as_deref().and_then(|id| doc.get_mut(id)) else {
            self.dirty.store(false, Ordering::SeqCst);
            return;
        };
        let Some(children) = body.child_elements_mut() else {
            self.dirty.store(false, Ordering::SeqCst);
            return;
        };

        let positions: HashMap<String, usize> = children
            .iter()
            .enumerate()
            .map(|(index, child)| (child.id.clone(), index))
            .collect();
        let mut slots: Vec<Option<Element>> = children.drain(..).map(Some).collect();

        for row in &guard.rows {
            let Some(mut element) = positions.get(&row.id).and_then(|&i| slots[i].take()) else {
                continue;
            };
            element.hidden = !row.visible;
            if row.visible && row.revealed {
                element.add_class("fade-in");
            }
            children.push(element);
        }

        let unknown = slots.iter().filter(|s| s.is_some()).count();
        if unknown > 0 {
            debug!("{unknown} unknown children left in {:?}", self.table_id());
        }
        children.extend(slots.into_iter().flatten());

        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Give each row a staggered entry delay (`data-animation-delay`, in ms).
    pub fn stagger_rows(&self, doc: &mut Document) {
        let Ok(guard) = self.inner.read() else {
            return;
        };
        for (index, row) in guard.rows.iter().enumerate() {
            if let Some(element) = doc.get_mut(&row.id) {
                element.set_attr("data-animation-delay", (index as u64 * ROW_STAGGER_MS).to_string());
            }
        }
    }

    /// Header class currently projected for `column`.
    pub fn header_class(&self, column: usize) -> Option<&'static str> {
        self.sort_direction(column).css_class()
    }
}
