//! Rendered page root with id lookup.

use log::trace;

use crate::element::{find_all, find_element, find_element_mut, find_parent_mut, walk_mut};
use crate::types::Tag;
use crate::Element;

/// A rendered page.
///
/// Controllers read their initial model out of a `Document` and write their
/// state back into it; the document itself has no behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::new(Tag::Html).id("html"))
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element (`<html>`).
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Look up an element by id, like `document.getElementById`.
    pub fn get(&self, id: &str) -> Option<&Element> {
        let found = find_element(&self.root, id);
        if found.is_none() {
            trace!("No element with id {id:?}");
        }
        found
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        let found = find_element_mut(&mut self.root, id);
        if found.is_none() {
            trace!("No element with id {id:?}");
        }
        found
    }

    pub fn contains_id(&self, id: &str) -> bool {
        find_element(&self.root, id).is_some()
    }

    /// Parent of the element with `id`.
    pub fn parent_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_parent_mut(&mut self.root, id)
    }

    /// Whether `id` is `ancestor_id` or one of its descendants.
    pub fn is_within(&self, ancestor_id: &str, id: &str) -> bool {
        self.get(ancestor_id)
            .is_some_and(|ancestor| find_element(ancestor, id).is_some())
    }

    /// All elements matching `pred`, in document order.
    pub fn query_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        find_all(&self.root, &pred)
    }

    /// Ids of all elements matching `pred`, in document order.
    pub fn ids_where(&self, pred: impl Fn(&Element) -> bool) -> Vec<String> {
        self.query_all(pred).into_iter().map(|e| e.id.clone()).collect()
    }

    /// Apply `f` to every element in the document.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        walk_mut(&mut self.root, &mut f);
    }
}
