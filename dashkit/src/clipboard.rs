//! Copy-to-clipboard with user feedback.

use async_trait::async_trait;
use dashdom::Element;
use log::warn;
use thiserror::Error;

use crate::toast::{Notify, ToastLevel};

/// Shown after a successful copy ("copied to clipboard").
pub const COPIED_MESSAGE: &str = "تم النسخ إلى الحافظة";

/// Shown when the host refuses the copy ("copy failed").
pub const COPY_FAILED_MESSAGE: &str = "تعذر النسخ إلى الحافظة";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard access denied")]
    Denied,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Host clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Text a `[data-copy]` element copies: the attribute value, or the
/// element's text when the attribute is empty.
pub fn copy_source(element: &Element) -> Option<String> {
    let value = element.data("copy")?;
    if value.is_empty() {
        Some(element.text_content())
    } else {
        Some(value.to_string())
    }
}

/// Copy `text` and tell the user how it went.
///
/// A rejected write is logged and reported with an error toast.
pub async fn copy_text(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notify,
    text: &str,
) -> Result<(), ClipboardError> {
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(COPIED_MESSAGE, ToastLevel::Success);
            Ok(())
        }
        Err(e) => {
            warn!("Copy to clipboard failed: {e}");
            notifier.notify(COPY_FAILED_MESSAGE, ToastLevel::Error);
            Err(e)
        }
    }
}
