//! Scroll-triggered entry animations.
//!
//! Elements marked with `data-animate` get their animation class the first
//! time enough of them scrolls into view, then are no longer observed.

use dashdom::Document;
use log::trace;

/// Fraction of an element that must be visible to trigger it.
pub const THRESHOLD: f32 = 0.1;

/// The viewport's bottom edge is pulled up by this many pixels.
pub const BOTTOM_MARGIN: u32 = 50;

/// Animation used when `data-animate` has no value.
pub const DEFAULT_ANIMATION: &str = "fadeIn";

/// Visibility report for one observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    /// Visible fraction of the element, 0.0 to 1.0.
    pub ratio: f32,
}

impl Intersection {
    pub fn new(id: impl Into<String>, ratio: f32) -> Self {
        Self {
            id: id.into(),
            ratio,
        }
    }

    /// Compute the report for an element spanning `top..bottom` (px, page
    /// coordinates) against a viewport spanning `view_top..view_bottom`.
    pub fn measure(id: impl Into<String>, top: u32, bottom: u32, view_top: u32, view_bottom: u32) -> Self {
        let view_bottom = view_bottom.saturating_sub(BOTTOM_MARGIN);
        let height = bottom.saturating_sub(top);
        let visible = bottom.min(view_bottom).saturating_sub(top.max(view_top));
        let ratio = if height == 0 {
            0.0
        } else {
            visible as f32 / height as f32
        };
        Self::new(id, ratio)
    }

    pub fn is_intersecting(&self) -> bool {
        self.ratio >= THRESHOLD && self.ratio > 0.0
    }
}

/// Tracks which `data-animate` elements are still waiting to appear.
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    observed: Vec<String>,
}

impl ScrollReveal {
    /// Observe every `data-animate` element on the page.
    pub fn bind(doc: &Document) -> Self {
        Self {
            observed: doc.ids_where(|e| e.has_attr("data-animate")),
        }
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// Apply a batch of visibility reports; triggered elements get their
    /// animation class and are dropped from observation.
    ///
    /// Returns the ids that were triggered.
    pub fn on_intersections(&mut self, doc: &mut Document, entries: &[Intersection]) -> Vec<String> {
        let mut triggered = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            let Some(pos) = self.observed.iter().position(|id| *id == entry.id) else {
                continue;
            };
            self.observed.remove(pos);

            if let Some(element) = doc.get_mut(&entry.id) {
                let animation = element
                    .data("animate")
                    .filter(|a| !a.is_empty())
                    .unwrap_or(DEFAULT_ANIMATION)
                    .to_string();
                trace!("Revealing {} with {animation}", entry.id);
                element.add_class(animation);
            }
            triggered.push(entry.id.clone());
        }
        triggered
    }
}
