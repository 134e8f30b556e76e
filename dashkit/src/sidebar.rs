//! Collapsible navigation sidebar.

use std::time::Duration;

use dashdom::Document;
use log::debug;

/// Widest viewport (px) treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Quiet window for resize handling.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

pub const SIDEBAR_ID: &str = "sidebar";
pub const TOGGLE_ID: &str = "sidebarToggle";
pub const OVERLAY_ID: &str = "sidebarOverlay";

const ACTIVE_CLASS: &str = "active";

/// Open/closed state of the sidebar and its toggle button and overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
    has_toggle: bool,
    has_overlay: bool,
}

impl Sidebar {
    /// Bind to `#sidebar`; `None` when the page has no sidebar.
    pub fn bind(doc: &Document) -> Option<Self> {
        let sidebar = doc.get(SIDEBAR_ID)?;
        Some(Self {
            open: sidebar.has_class(ACTIVE_CLASS),
            has_toggle: doc.contains_id(TOGGLE_ID),
            has_overlay: doc.contains_id(OVERLAY_ID),
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a click anywhere on the page.
    ///
    /// Clicks on the toggle button toggle; clicks on the overlay close. On a
    /// mobile viewport, a click outside both the sidebar and the toggle
    /// closes an open sidebar.
    pub fn on_click(&mut self, doc: &Document, target_id: &str, viewport_width: u32) {
        if self.has_toggle && doc.is_within(TOGGLE_ID, target_id) {
            self.toggle();
            return;
        }
        if self.has_overlay && doc.is_within(OVERLAY_ID, target_id) {
            self.close();
            return;
        }
        if viewport_width <= MOBILE_BREAKPOINT && self.open && !doc.is_within(SIDEBAR_ID, target_id) {
            debug!("Click outside sidebar, closing");
            self.close();
        }
    }

    /// Handle a (debounced) resize: leaving the mobile layout closes the sidebar.
    pub fn on_resize(&mut self, viewport_width: u32) {
        if viewport_width > MOBILE_BREAKPOINT {
            self.close();
        }
    }

    /// Project the state as the `active` class on sidebar, toggle and overlay.
    pub fn render(&self, doc: &mut Document) {
        for id in [SIDEBAR_ID, TOGGLE_ID, OVERLAY_ID] {
            if let Some(element) = doc.get_mut(id) {
                element.set_class(ACTIVE_CLASS, self.open);
            }
        }
    }
}
