//! Page-level initialization and event routing.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use dashdom::{Document, Tag};
use log::{debug, info};

use crate::animation::{CounterAnimation, drive_frames, parse_counter};
use crate::debounce::Debouncer;
use crate::reveal::{Intersection, ScrollReveal};
use crate::sidebar::{RESIZE_DEBOUNCE, Sidebar};
use crate::toast::{ToastCenter, ToastLevel};

/// Class of the stat elements that count up on load.
pub const COUNTER_CLASS: &str = "stat-value";

/// Class of toasts rendered with the page.
pub const RENDERED_TOAST_CLASS: &str = "toast";

/// Entry animation stagger between consecutive cards, in milliseconds.
pub const CARD_STAGGER_MS: u64 = 100;

/// Card classes and the stagger slot their first card starts at.
const CARD_GROUPS: [(&str, u64); 3] = [("stat-card", 0), ("chart-card", 2), ("table-card", 3)];

/// Controllers for everything on a dashboard page except tables, which are
/// bound individually with [`TableView::bind`](crate::table::TableView::bind).
#[derive(Debug)]
pub struct Dashboard {
    sidebar: Option<Arc<RwLock<Sidebar>>>,
    reveal: ScrollReveal,
    counters: Vec<(String, CounterAnimation)>,
    toasts: ToastCenter,
    resize: Debouncer,
}

impl Dashboard {
    /// Wire up a freshly rendered page.
    ///
    /// Counters are reset to their first frame; run
    /// [`animate_counters`](Self::animate_counters) to count them up.
    pub fn init(doc: &mut Document) -> Self {
        let secured = secure_external_links(doc);
        let cards = stagger_cards(doc);
        let sidebar = Sidebar::bind(doc).map(|s| Arc::new(RwLock::new(s)));
        let reveal = ScrollReveal::bind(doc);
        let counters = collect_counters(doc);
        for (id, counter) in &counters {
            if let Some(element) = doc.get_mut(id) {
                element.set_text(counter.frame(0).text);
            }
        }

        let toasts = ToastCenter::new();
        toasts.enqueue_rendered(collect_rendered_toasts(doc), Instant::now());

        debug!(
            "Page: sidebar={}, {} reveal targets, {} counters, {} cards, {} links secured",
            sidebar.is_some(),
            reveal.observed().len(),
            counters.len(),
            cards,
            secured
        );
        info!("Dashboard initialized");

        Self {
            sidebar,
            reveal,
            counters,
            toasts,
            resize: Debouncer::new(RESIZE_DEBOUNCE),
        }
    }

    /// Current sidebar state, if the page has one.
    pub fn sidebar(&self) -> Option<Sidebar> {
        self.sidebar
            .as_ref()
            .and_then(|s| s.read().ok().map(|s| s.clone()))
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    /// Stat counters to animate, by element id.
    pub fn counters(&self) -> &[(String, CounterAnimation)] {
        &self.counters
    }

    /// Write counter frame `tick` into each counter element.
    ///
    /// Returns `true` once every counter shows its end value.
    pub fn render_counters(&self, doc: &mut Document, tick: u32) -> bool {
        let mut done = true;
        for (id, counter) in &self.counters {
            let frame = counter.frame(tick);
            done &= frame.done;
            if let Some(element) = doc.get_mut(id) {
                element.set_text(frame.text);
            }
        }
        done
    }

    /// Count every counter up to its end value on the tokio clock.
    pub async fn animate_counters(&self, doc: &Mutex<Document>) {
        if self.counters.is_empty() {
            return;
        }
        drive_frames(|tick| match doc.lock() {
            Ok(mut doc) => self.render_counters(&mut doc, tick),
            Err(_) => true,
        })
        .await;
        debug!("Counters finished");
    }

    /// Route a page click.
    pub fn on_click(&self, doc: &mut Document, target_id: &str, viewport_width: u32) {
        let Some(sidebar) = &self.sidebar else {
            return;
        };
        if let Ok(mut sidebar) = sidebar.write() {
            sidebar.on_click(doc, target_id, viewport_width);
            sidebar.render(doc);
        }
    }

    /// Route a window resize. Handled after the resize quiet window; call
    /// [`render`](Self::render) afterwards to project the result.
    pub fn on_resize(&self, viewport_width: u32) {
        let Some(sidebar) = self.sidebar.clone() else {
            return;
        };
        self.resize.call(move || {
            if let Ok(mut sidebar) = sidebar.write() {
                sidebar.on_resize(viewport_width);
            }
        });
    }

    /// Route visibility reports to scroll reveal.
    pub fn on_intersections(&mut self, doc: &mut Document, entries: &[Intersection]) -> Vec<String> {
        self.reveal.on_intersections(doc, entries)
    }

    /// Project controller state onto the page.
    pub fn render(&self, doc: &mut Document) {
        if let Some(sidebar) = self.sidebar.as_ref().and_then(|s| s.read().ok()) {
            sidebar.render(doc);
        }
    }
}

/// Add `rel="noopener noreferrer"` to links opening a new tab.
///
/// Returns the number of links updated.
pub fn secure_external_links(doc: &mut Document) -> usize {
    let mut count = 0;
    doc.for_each_mut(|e| {
        if e.tag == Tag::A && e.attr_value("target") == Some("_blank") {
            e.set_attr("rel", "noopener noreferrer");
            count += 1;
        }
    });
    count
}

/// Give cards a staggered entry delay (`data-animation-delay`, in ms).
///
/// Stat cards start at 0, chart cards two slots later and table cards three
/// slots later, each card one [`CARD_STAGGER_MS`] slot after the previous card
/// of its kind. Returns the number of cards updated.
pub fn stagger_cards(doc: &mut Document) -> usize {
    let mut count = 0;
    for (class, offset) in CARD_GROUPS {
        for (index, id) in doc.ids_where(|e| e.has_class(class)).into_iter().enumerate() {
            if let Some(card) = doc.get_mut(&id) {
                let delay = (index as u64 + offset) * CARD_STAGGER_MS;
                card.set_attr("data-animation-delay", delay.to_string());
                count += 1;
            }
        }
    }
    count
}

/// A count-up animation for every `.stat-value`, ending at its current text.
pub fn collect_counters(doc: &Document) -> Vec<(String, CounterAnimation)> {
    doc.query_all(|e| e.has_class(COUNTER_CLASS))
        .into_iter()
        .map(|e| (e.id.clone(), CounterAnimation::to(parse_counter(&e.text_content()))))
        .collect()
}

/// Messages and levels of `.toast` elements rendered with the page.
///
/// The level comes from `data-level` and defaults to info.
pub fn collect_rendered_toasts(doc: &Document) -> Vec<(String, ToastLevel)> {
    doc.query_all(|e| e.has_class(RENDERED_TOAST_CLASS))
        .into_iter()
        .map(|e| {
            let level = e
                .data("level")
                .and_then(|l| l.parse().ok())
                .unwrap_or_default();
            (e.text_content().trim().to_string(), level)
        })
        .collect()
}
