//! Browser Helpers
//!
//! Thin wrappers over `window` / `document` used by the page hosts.

use leptos::prelude::*;
use lunch_core::{ClientConfig, Field};
use wasm_bindgen::JsCast;

/// `<script id="budget-lunch-config" type="application/json">` holding a `ClientConfig`
pub const CONFIG_SCRIPT_ID: &str = "budget-lunch-config";

pub fn pathname() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

pub fn origin() -> Option<String> {
    window().location().origin().ok()
}

pub fn redirect(path: &str) {
    tracing::info!(path, "navigating");
    if let Err(e) = window().location().set_href(path) {
        tracing::error!(path, error = ?e, "redirect failed");
    }
}

/// Blocking `window.confirm`; a dismissed or failed dialog counts as "no"
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// DOM id of the input behind a validation field
pub fn field_id(field: Field) -> &'static str {
    match field {
        Field::Budget => "price",
        Field::ItemName => "addName",
        Field::ItemPrice => "addPrice",
        Field::Email => "email",
        Field::Password => "password",
        Field::SignupEmail => "signupEmail",
        Field::SignupPassword => "signupPassword",
        Field::ConfirmPassword => "confirmPassword",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FocusOutcome {
    Focused,
    Missing,
    Failed(String),
}

fn report_focus(id: &str, outcome: &FocusOutcome) {
    match outcome {
        FocusOutcome::Focused => {}
        FocusOutcome::Missing => tracing::debug!(id, "focus target not in the document"),
        FocusOutcome::Failed(error) => tracing::warn!(id, error = %error, "focus failed"),
    }
}

pub fn focus_element(id: &str) {
    let element = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    let outcome = match element {
        Some(el) => match el.focus() {
            Ok(()) => FocusOutcome::Focused,
            Err(e) => FocusOutcome::Failed(format!("{:?}", e)),
        },
        None => FocusOutcome::Missing,
    };
    report_focus(id, &outcome);
}

pub fn focus_field(field: Field) {
    focus_element(field_id(field));
}

/// Page configuration: the embedded JSON block if present, defaults otherwise.
/// An empty `base_url` resolves to the page origin.
pub fn load_config() -> ClientConfig {
    let raw = document()
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let config = match raw {
        Some(raw) => ClientConfig::from_json(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring invalid page config");
            ClientConfig::default()
        }),
        None => ClientConfig::default(),
    };

    if config.base_url.is_empty() {
        if let Some(origin) = origin() {
            return config.with_base_url(origin);
        }
    }
    config
}
