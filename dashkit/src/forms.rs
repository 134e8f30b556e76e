//! Form enhancements: floating labels, submit-time validation and the
//! submit button's loading state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashdom::{Content, Document, Element, Tag};
use email_address::EmailAddress;
use log::debug;
use regex::Regex;
use tokio::runtime::Handle;

/// Label of a submit button while its form is processing ("processing...").
pub const SUBMIT_LOADING_LABEL: &str = "جاري المعالجة...";

/// A locked submit button is restored after this long.
pub const SUBMIT_RESTORE_DELAY: Duration = Duration::from_secs(5);

const CONTROL_CLASS: &str = "form-control";
const FOCUSED_CLASS: &str = "focused";
const VALIDATED_CLASS: &str = "was-validated";
const INVALID_CLASS: &str = "is-invalid";

/// Information about a single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Id of the failing control.
    pub widget_id: String,
    pub message: String,
}

/// Result of validating a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }
}

/// Focus on a `.form-control` marks its parent as focused.
pub fn on_focus(doc: &mut Document, control_id: &str) {
    if !doc.get(control_id).is_some_and(|c| c.has_class(CONTROL_CLASS)) {
        return;
    }
    if let Some(parent) = doc.parent_mut(control_id) {
        parent.add_class(FOCUSED_CLASS);
    }
}

/// Blur on an empty `.form-control` clears the parent's focused mark.
pub fn on_blur(doc: &mut Document, control_id: &str) {
    let Some(control) = doc.get(control_id) else {
        return;
    };
    if !control.has_class(CONTROL_CLASS) || !control.value.as_deref().unwrap_or("").is_empty() {
        return;
    }
    if let Some(parent) = doc.parent_mut(control_id) {
        parent.remove_class(FOCUSED_CLASS);
    }
}

/// Validate a `form[data-validate]` on submit.
///
/// The form is marked `was-validated` either way and failing controls get
/// `is-invalid`. Forms without `data-validate` (or missing forms) always
/// pass. Submission should go ahead only for a valid result.
pub fn on_submit(doc: &mut Document, form_id: &str) -> ValidationResult {
    let Some(form) = doc.get(form_id).filter(|f| f.has_attr("data-validate")) else {
        return ValidationResult::Valid;
    };

    let errors = validate(form).errors().to_vec();
    let passing: Vec<String> = dashdom::find_all(form, &|e| e.tag == Tag::Input)
        .into_iter()
        .filter(|c| errors.iter().all(|e| e.widget_id != c.id))
        .map(|c| c.id.clone())
        .collect();

    for error in &errors {
        if let Some(control) = doc.get_mut(&error.widget_id) {
            control.add_class(INVALID_CLASS);
        }
    }
    for id in &passing {
        if let Some(control) = doc.get_mut(id) {
            control.remove_class(INVALID_CLASS);
        }
    }
    if let Some(form) = doc.get_mut(form_id) {
        form.add_class(VALIDATED_CLASS);
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        debug!("Form {form_id:?} has {} invalid fields", errors.len());
        ValidationResult::Invalid(errors)
    }
}

/// Check every input inside `form` without touching the page.
pub fn validate(form: &Element) -> ValidationResult {
    let errors: Vec<FieldError> = dashdom::find_all(form, &|e| e.tag == Tag::Input)
        .into_iter()
        .filter_map(|control| {
            check_control(control).map(|message| FieldError {
                widget_id: control.id.clone(),
                message,
            })
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

/// Handle a click on the submit button `button_id` of form `form_id`.
///
/// When the form passes its checks the button is disabled and shows a
/// spinner with [`SUBMIT_LOADING_LABEL`]. The returned lock restores it.
/// Invalid forms, missing elements and buttons that are already disabled
/// give `None`.
pub fn on_submit_click(doc: &mut Document, form_id: &str, button_id: &str) -> Option<SubmitLock> {
    if !doc.get(form_id).is_some_and(|form| validate(form).is_valid()) {
        return None;
    }

    let button = doc.get_mut(button_id)?;
    if button.tag != Tag::Button
        || button.attr_value("type") != Some("submit")
        || button.has_attr("disabled")
    {
        return None;
    }

    let label = std::mem::replace(
        &mut button.content,
        Content::Children(vec![
            Element::new("i").class("fas").class("fa-spinner").class("fa-spin"),
            Element::text(SUBMIT_LOADING_LABEL),
        ]),
    );
    button.set_attr("disabled", "");
    debug!("Submit button {button_id:?} locked");

    Some(SubmitLock {
        button_id: button_id.to_string(),
        label,
    })
}

/// A submit button in its loading state, holding the label to restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLock {
    button_id: String,
    label: Content,
}

impl SubmitLock {
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    /// Re-enable the button and put its label back.
    pub fn restore(self, doc: &mut Document) {
        if let Some(button) = doc.get_mut(&self.button_id) {
            button.remove_attr("disabled");
            button.content = self.label;
        }
    }

    /// Restore after [`SUBMIT_RESTORE_DELAY`]. Outside a tokio runtime the
    /// button is restored immediately.
    pub fn restore_later(self, doc: Arc<Mutex<Document>>) {
        let Ok(handle) = Handle::try_current() else {
            if let Ok(mut doc) = doc.lock() {
                self.restore(&mut doc);
            }
            return;
        };
        handle.spawn(async move {
            tokio::time::sleep(SUBMIT_RESTORE_DELAY).await;
            if let Ok(mut doc) = doc.lock() {
                self.restore(&mut doc);
            }
        });
    }
}

/// Constraint check for one control, `None` when it passes.
fn check_control(control: &Element) -> Option<String> {
    if control.has_attr("disabled") {
        return None;
    }
    let value = control.value.as_deref().unwrap_or("");

    if value.is_empty() {
        return control
            .has_attr("required")
            .then(|| "This field is required".to_string());
    }

    if control.attr_value("type") == Some("email") && !EmailAddress::is_valid(value) {
        return Some("Please enter a valid email address".to_string());
    }

    let length = value.chars().count();
    if let Some(min) = control.attr_value("minlength").and_then(|m| m.parse::<usize>().ok()) {
        if length < min {
            return Some(format!("Please use at least {min} characters"));
        }
    }
    if let Some(max) = control.attr_value("maxlength").and_then(|m| m.parse::<usize>().ok()) {
        if length > max {
            return Some(format!("Please use at most {max} characters"));
        }
    }

    // Invalid patterns are ignored, as browsers do.
    if let Some(pattern) = control.attr_value("pattern") {
        if let Ok(re) = Regex::new(&format!("^(?:{pattern})$")) {
            if !re.is_match(value) {
                return Some("Please match the requested format".to_string());
            }
        }
    }

    None
}
