//! Page loader and per-element loading overlays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use dashdom::{Document, Element};
use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Id of the full-page loader element.
pub const PAGE_LOADER_ID: &str = "pageLoader";

/// The loader stays up at least this long after it was first shown.
pub const MIN_VISIBLE: Duration = Duration::from_millis(1000);

/// Fade-out time added after the minimum visible time.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Full-page loading indicator.
///
/// `hide()` never takes the loader down before [`MIN_VISIBLE`] has passed
/// since it was first shown, so fast loads don't flicker.
#[derive(Debug, Clone)]
pub struct PageLoader {
    first_shown: Arc<OnceLock<Instant>>,
    visible: Arc<AtomicBool>,
    pending_hide: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PageLoader {
    /// Create a hidden loader.
    pub fn new() -> Self {
        Self {
            first_shown: Arc::new(OnceLock::new()),
            visible: Arc::new(AtomicBool::new(false)),
            pending_hide: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a loader and show it immediately.
    pub fn start() -> Self {
        let loader = Self::new();
        loader.show();
        loader
    }

    /// Show the loader; the first call starts the minimum visible time.
    pub fn show(&self) {
        self.cancel_hide();
        self.first_shown.get_or_init(Instant::now);
        self.visible.store(true, Ordering::SeqCst);
    }

    /// Hide once the minimum visible time and the fade have passed.
    pub fn hide(&self) {
        let delay = self.hide_delay(Instant::now());
        let visible = Arc::clone(&self.visible);

        let Ok(handle) = Handle::try_current() else {
            visible.store(false, Ordering::SeqCst);
            return;
        };
        let Ok(mut pending) = self.pending_hide.lock() else {
            return;
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        debug!("Hiding page loader in {delay:?}");
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            visible.store(false, Ordering::SeqCst);
        }));
    }

    /// Wait between a `hide()` at `now` and the loader disappearing.
    ///
    /// A loader that was never shown only fades.
    pub fn hide_delay(&self, now: Instant) -> Duration {
        let Some(shown) = self.first_shown.get() else {
            return FADE_OUT;
        };
        MIN_VISIBLE.saturating_sub(now.saturating_duration_since(*shown)) + FADE_OUT
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Project the loader state onto `#pageLoader`.
    pub fn render(&self, doc: &mut Document) {
        let Some(element) = doc.get_mut(PAGE_LOADER_ID) else {
            return;
        };
        let visible = self.is_visible();
        element.set_class("show", visible);
        element.set_class("hidden", !visible);
    }

    fn cancel_hide(&self) {
        if let Ok(mut pending) = self.pending_hide.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }
}

/// Spinner overlay placed inside an arbitrary element.
pub struct LoadingOverlay;

impl LoadingOverlay {
    const OVERLAY_CLASS: &'static str = "loading-overlay";
    const SPINNER_CLASS: &'static str = "loading-spinner";

    /// Cover the element `id` with a spinner. No-op if it is missing or
    /// already covered.
    pub fn show(doc: &mut Document, id: &str) {
        let Some(element) = doc.get_mut(id) else {
            return;
        };
        if Self::overlay_id(element).is_some() {
            return;
        }
        element.set_attr("data-position", "relative");
        element.push_child(
            Element::div()
                .class(Self::OVERLAY_CLASS)
                .child(Element::div().class(Self::SPINNER_CLASS)),
        );
    }

    /// Remove the spinner from the element `id`.
    pub fn hide(doc: &mut Document, id: &str) {
        let Some(element) = doc.get_mut(id) else {
            return;
        };
        if let Some(overlay) = Self::overlay_id(element) {
            element.remove_child(&overlay);
        }
    }

    pub fn is_shown(doc: &Document, id: &str) -> bool {
        doc.get(id).and_then(Self::overlay_id).is_some()
    }

    fn overlay_id(element: &Element) -> Option<String> {
        element
            .child_elements()
            .iter()
            .find(|c| c.has_class(Self::OVERLAY_CLASS))
            .map(|c| c.id.clone())
    }
}
