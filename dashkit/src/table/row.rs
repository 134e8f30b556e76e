//! Row model built from a rendered `<tr>`.

use dashdom::Element;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Id of the `<tr>` element.
    pub id: String,
    /// Raw cell text, in column order.
    pub cells: Vec<String>,
    /// Case-folded text of the whole row.
    folded_text: String,
    /// Whether the row is displayed.
    pub visible: bool,
    /// Whether a search has revealed this row (renders as `fade-in`).
    pub revealed: bool,
}

impl Row {
    /// Build a row from explicit cell text.
    pub fn new(id: impl Into<String>, cells: Vec<String>) -> Self {
        let folded_text = cells.concat().to_lowercase();
        Self {
            id: id.into(),
            cells,
            folded_text,
            visible: true,
            revealed: false,
        }
    }

    /// Read a row from a `<tr>` element.
    ///
    /// The search term starts empty, so the row starts visible even when the
    /// element was rendered hidden.
    pub fn from_element(element: &Element) -> Self {
        let cells = element
            .child_elements()
            .iter()
            .filter(|c| c.tag.is_cell())
            .map(Element::text_content)
            .collect();
        Self {
            id: element.id.clone(),
            cells,
            folded_text: element.text_content().to_lowercase(),
            visible: true,
            revealed: false,
        }
    }

    /// Trimmed text of the cell at `column`, empty when the row is shorter.
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(|c| c.trim()).unwrap_or("")
    }

    /// Whether the row text contains `folded_term` (already case-folded).
    pub fn matches(&self, folded_term: &str) -> bool {
        self.folded_text.contains(folded_term)
    }
}
