use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashkit::forms::*;
use dashkit::prelude::*;

fn control(id: &str, value: &str) -> Element {
    Element::input(value).id(id).class("form-control")
}

fn signup_page() -> Document {
    Document::new(
        Element::new(Tag::Html).id("html").child(
            Element::form()
                .id("signup")
                .attr("data-validate", "")
                .child(
                    Element::div()
                        .id("nameGroup")
                        .class("form-group")
                        .child(control("name", "").attr("required", "")),
                )
                .child(control("email", "not-an-email").attr("type", "email"))
                .child(control("code", "AB1").attr("pattern", "[A-Z]{3}"))
                .child(
                    control("bio", "ab")
                        .attr("minlength", "3")
                        .attr("maxlength", "5"),
                )
                .child(control("optional", ""))
                .child(control("locked", "").attr("required", "").attr("disabled", ""))
                .child(control("broken", "anything").attr("pattern", "[")),
        ),
    )
}

fn set_value(doc: &mut Document, id: &str, value: &str) {
    doc.get_mut(id).unwrap().value = Some(value.to_string());
}

fn invalid(doc: &Document, id: &str) -> bool {
    doc.get(id).unwrap().has_class("is-invalid")
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_submit_reports_each_failing_control() {
    let mut doc = signup_page();
    let result = on_submit(&mut doc, "signup");

    assert!(!result.is_valid());
    let ids: Vec<_> = result.errors().iter().map(|e| e.widget_id.as_str()).collect();
    assert_eq!(ids, vec!["name", "email", "code", "bio"]);
    assert_eq!(result.errors()[3].message, "Please use at least 3 characters");

    assert!(doc.get("signup").unwrap().has_class("was-validated"));
    for id in ["name", "email", "code", "bio"] {
        assert!(invalid(&doc, id), "{id} should be invalid");
    }
    for id in ["optional", "locked", "broken"] {
        assert!(!invalid(&doc, id), "{id} should pass");
    }
}

#[test]
fn test_fixing_fields_clears_invalid_marks() {
    let mut doc = signup_page();
    on_submit(&mut doc, "signup");

    set_value(&mut doc, "name", "Sara");
    set_value(&mut doc, "email", "sara@example.com");
    set_value(&mut doc, "code", "ABC");
    set_value(&mut doc, "bio", "hello");

    let result = on_submit(&mut doc, "signup");
    assert_eq!(result, ValidationResult::Valid);
    assert!(doc.query_all(|e| e.has_class("is-invalid")).is_empty());
}

#[test]
fn test_maxlength_counts_characters() {
    let mut doc = signup_page();
    set_value(&mut doc, "bio", "مرحبا");
    on_submit(&mut doc, "signup");
    assert!(!invalid(&doc, "bio"));

    set_value(&mut doc, "bio", "toolong");
    let result = on_submit(&mut doc, "signup");
    assert!(
        result
            .errors()
            .iter()
            .any(|e| e.widget_id == "bio" && e.message == "Please use at most 5 characters")
    );
}

#[test]
fn test_unvalidated_form_always_passes() {
    let mut doc = Document::new(
        Element::new(Tag::Html)
            .id("html")
            .child(Element::form().id("plain").child(control("q", "").attr("required", ""))),
    );
    assert!(on_submit(&mut doc, "plain").is_valid());
    assert!(!doc.get("plain").unwrap().has_class("was-validated"));
    assert!(on_submit(&mut doc, "missing").is_valid());
}

// =============================================================================
// Focus tracking
// =============================================================================

#[test]
fn test_focus_and_blur_mark_parent() {
    let mut doc = signup_page();

    on_focus(&mut doc, "name");
    assert!(doc.get("nameGroup").unwrap().has_class("focused"));

    set_value(&mut doc, "name", "Sara");
    on_blur(&mut doc, "name");
    assert!(doc.get("nameGroup").unwrap().has_class("focused"));

    set_value(&mut doc, "name", "");
    on_blur(&mut doc, "name");
    assert!(!doc.get("nameGroup").unwrap().has_class("focused"));
}

#[test]
fn test_focus_ignores_non_controls() {
    let mut doc = signup_page();
    on_focus(&mut doc, "nameGroup");
    assert!(!doc.get("signup").unwrap().has_class("focused"));
}

// =============================================================================
// Submit button loading state
// =============================================================================

fn order_page(quantity: &str) -> Document {
    Document::new(
        Element::new(Tag::Html).id("html").child(
            Element::form()
                .id("orderForm")
                .child(control("quantity", quantity).attr("required", ""))
                .child(
                    Element::button("")
                        .id("placeOrder")
                        .attr("type", "submit")
                        .child(Element::new("i").class("fas").class("fa-check"))
                        .child(Element::text("Place order")),
                ),
        ),
    )
}

#[test]
fn test_submit_click_locks_button_of_valid_form() {
    let mut doc = order_page("3");
    let original = doc.get("placeOrder").unwrap().content.clone();

    let lock = on_submit_click(&mut doc, "orderForm", "placeOrder").unwrap();
    let button = doc.get("placeOrder").unwrap();
    assert!(button.has_attr("disabled"));
    assert_eq!(button.text_content(), SUBMIT_LOADING_LABEL);
    assert!(
        button
            .child_elements()
            .iter()
            .any(|c| c.has_class("fa-spinner"))
    );

    assert!(on_submit_click(&mut doc, "orderForm", "placeOrder").is_none());

    lock.restore(&mut doc);
    let button = doc.get("placeOrder").unwrap();
    assert!(!button.has_attr("disabled"));
    assert_eq!(button.content, original);
}

#[test]
fn test_submit_click_ignores_invalid_form() {
    let mut doc = order_page("");
    assert!(on_submit_click(&mut doc, "orderForm", "placeOrder").is_none());
    assert!(!doc.get("placeOrder").unwrap().has_attr("disabled"));
    assert!(!doc.get("orderForm").unwrap().has_class("was-validated"));
}

#[test]
fn test_submit_click_needs_submit_button() {
    let mut doc = order_page("3");
    doc.get_mut("placeOrder").unwrap().set_attr("type", "button");
    assert!(on_submit_click(&mut doc, "orderForm", "placeOrder").is_none());
    assert!(on_submit_click(&mut doc, "orderForm", "missing").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_locked_button_restores_after_delay() {
    let doc = Arc::new(Mutex::new(order_page("3")));
    let lock = {
        let mut page = doc.lock().unwrap();
        on_submit_click(&mut page, "orderForm", "placeOrder").unwrap()
    };
    lock.restore_later(Arc::clone(&doc));

    tokio::time::sleep(SUBMIT_RESTORE_DELAY - Duration::from_millis(1)).await;
    assert!(doc.lock().unwrap().get("placeOrder").unwrap().has_attr("disabled"));

    tokio::time::sleep(Duration::from_millis(2)).await;
    let page = doc.lock().unwrap();
    let button = page.get("placeOrder").unwrap();
    assert!(!button.has_attr("disabled"));
    assert_eq!(button.text_content(), "Place order");
}
