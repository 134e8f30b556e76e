use std::sync::Mutex;

use async_trait::async_trait;
use dashkit::clipboard::*;
use dashkit::prelude::*;

#[derive(Default)]
struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct DeniedClipboard;

#[async_trait]
impl Clipboard for DeniedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Denied)
    }
}

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(String, ToastLevel)>>,
}

impl Notify for Recorder {
    fn notify(&self, message: &str, level: ToastLevel) {
        self.seen.lock().unwrap().push((message.to_string(), level));
    }
}

#[tokio::test]
async fn test_copy_success_notifies() {
    let clipboard = MemoryClipboard::default();
    let recorder = Recorder::default();

    copy_text(&clipboard, &recorder, "INV-2041").await.unwrap();

    assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("INV-2041"));
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![(COPIED_MESSAGE.to_string(), ToastLevel::Success)]
    );
}

#[tokio::test]
async fn test_copy_failure_notifies_and_returns_error() {
    let recorder = Recorder::default();

    let result = copy_text(&DeniedClipboard, &recorder, "secret").await;

    assert!(matches!(result, Err(ClipboardError::Denied)));
    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![(COPY_FAILED_MESSAGE.to_string(), ToastLevel::Error)]
    );
}

#[tokio::test]
async fn test_copy_into_toast_center() {
    let center = ToastCenter::new();
    copy_text(&MemoryClipboard::default(), &center, "x").await.unwrap();
    assert_eq!(center.len(), 1);
}

#[test]
fn test_copy_source() {
    let explicit = Element::button("Copy").attr("data-copy", "ORD-77");
    assert_eq!(copy_source(&explicit).as_deref(), Some("ORD-77"));

    let from_text = Element::text("ORD-78").attr("data-copy", "");
    assert_eq!(copy_source(&from_text).as_deref(), Some("ORD-78"));

    assert_eq!(copy_source(&Element::text("plain")), None);
}
