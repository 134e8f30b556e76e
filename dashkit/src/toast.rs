//! Toast notifications.

use std::str::FromStr;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use log::info;

/// Default duration for toast notifications.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Delay between consecutive toasts rendered with the page.
pub const TOAST_STAGGER: Duration = Duration::from_millis(200);

/// Maximum number of toasts displayed at once.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Toast notification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Font Awesome icon for this level.
    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Info => "fa-info-circle",
            ToastLevel::Success => "fa-check-circle",
            ToastLevel::Warning => "fa-exclamation-triangle",
            ToastLevel::Error => "fa-exclamation-circle",
        }
    }

    /// Theme color variable for the toast background.
    pub fn color_var(self) -> &'static str {
        match self {
            ToastLevel::Info => "var(--bs-info)",
            ToastLevel::Success => "var(--bs-success)",
            ToastLevel::Warning => "var(--bs-warning)",
            ToastLevel::Error => "var(--bs-danger)",
        }
    }
}

impl FromStr for ToastLevel {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Info`; `danger` is an alias of `Error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "success" => ToastLevel::Success,
            "warning" => ToastLevel::Warning,
            "error" | "danger" => ToastLevel::Error,
            _ => ToastLevel::Info,
        })
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message to display (single line)
    pub message: String,
    /// Toast level (affects styling)
    pub level: ToastLevel,
    /// How long to show the toast
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Create a simple info toast
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    /// Create a success toast
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    /// Create a warning toast
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    /// Create an error toast
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    /// Set custom duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::info(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::info(message)
    }
}

/// Anything that can put a transient message in front of the user.
///
/// Fire-and-forget: callers never learn whether the message was shown.
pub trait Notify: Send + Sync {
    fn notify(&self, message: &str, level: ToastLevel);
}

/// A toast scheduled for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub toast: Toast,
    /// When the toast becomes visible.
    pub shown_at: Instant,
}

impl ActiveToast {
    pub fn expires_at(&self) -> Instant {
        self.shown_at + self.toast.duration
    }

    /// Whether the toast is on screen at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        now >= self.shown_at && now < self.expires_at()
    }
}

/// Queue of toasts with display and expiry times.
#[derive(Debug, Clone, Default)]
pub struct ToastCenter {
    toasts: Arc<RwLock<Vec<ActiveToast>>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast starting at `now`.
    pub fn push_at(&self, toast: impl Into<Toast>, now: Instant) {
        let toast = toast.into();
        info!("Toast ({:?}): {}", toast.level, toast.message);
        if let Ok(mut toasts) = self.toasts.write() {
            toasts.push(ActiveToast {
                toast,
                shown_at: now,
            });
        }
    }

    /// Show a toast now.
    pub fn push(&self, toast: impl Into<Toast>) {
        self.push_at(toast, Instant::now());
    }

    /// Queue toasts that were rendered with the page, each one
    /// [`TOAST_STAGGER`] after the previous.
    pub fn enqueue_rendered<I, S>(&self, messages: I, now: Instant)
    where
        I: IntoIterator<Item = (S, ToastLevel)>,
        S: Into<String>,
    {
        for (index, (message, level)) in messages.into_iter().enumerate() {
            self.push_at(Toast::new(message, level), now + TOAST_STAGGER * index as u32);
        }
    }

    /// Toasts visible at `now`, oldest first, at most [`MAX_VISIBLE_TOASTS`].
    pub fn active(&self, now: Instant) -> Vec<ActiveToast> {
        self.toasts
            .read()
            .map(|toasts| {
                toasts
                    .iter()
                    .filter(|t| t.is_visible(now))
                    .take(MAX_VISIBLE_TOASTS)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Drop expired toasts, returning how many were removed.
    pub fn prune(&self, now: Instant) -> usize {
        let Ok(mut toasts) = self.toasts.write() else {
            return 0;
        };
        let before = toasts.len();
        toasts.retain(|t| t.expires_at() > now);
        before - toasts.len()
    }

    /// Number of toasts shown or waiting to be shown.
    pub fn len(&self) -> usize {
        self.toasts.read().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notify for ToastCenter {
    fn notify(&self, message: &str, level: ToastLevel) {
        self.push(Toast::new(message, level));
    }
}
