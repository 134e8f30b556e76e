use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Tag;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node of a rendered page.
///
/// Elements without an explicit `id` get a generated one, so every node has a
/// stable identity that controllers can hold on to across reorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    /// `display: none` when true.
    pub hidden: bool,

    // Markup attributes (`data-*`, `required`, `target`, ...)
    pub attrs: BTreeMap<String, String>,

    /// Current value of a form control.
    pub value: Option<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            hidden: false,
            attrs: BTreeMap::new(),
            value: None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Span)
        }
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Th)
        }
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Td)
        }
    }

    /// Create a form control holding `value`.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new(Tag::Input)
        }
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new(Tag::A).attr("href", href)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            ..Self::new(Tag::Button)
        }
    }

    // Builders

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self.push_child(child);
        }
        self
    }

    // Tree access

    /// Direct children, empty for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable children, `None` unless the content is a child list.
    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Append a child, replacing text or empty content with a child list.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove the direct child with `id`, returning it.
    pub fn remove_child(&mut self, id: &str) -> Option<Element> {
        let children = self.child_elements_mut()?;
        let pos = children.iter().position(|c| c.id == id)?;
        Some(children.remove(pos))
    }

    /// Text of this element and every descendant, like the DOM `textContent`.
    pub fn text_content(&self) -> String {
        self.content.text()
    }

    /// Replace the content with `text`, dropping any children.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle `class`, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add or remove `class` depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // Attributes

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Read a `data-*` attribute by its short name (`data("animate")` reads `data-animate`).
    pub fn data(&self, key: &str) -> Option<&str> {
        self.attr_value(&format!("data-{key}"))
    }
}
