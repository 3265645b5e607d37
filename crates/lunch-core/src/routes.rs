//! Backend Routes
//!
//! Path builders for every backend call. User-supplied segments are
//! percent-encoded with the `encodeURIComponent` character set.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::ItemDraft;

/// Characters left unescaped by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const CHECK_AUTH: &str = "/check-auth";
pub const LOGOUT: &str = "/logout";
pub const LIST: &str = "/list";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

pub fn search(budget: f64) -> String {
    format!("/search/{}", budget)
}

/// `/add/{name}/{price}?imageurl={url}`; the query is always present, empty when there is no image
pub fn add_item(draft: &ItemDraft) -> String {
    format!(
        "/add/{}/{}?imageurl={}",
        encode_component(&draft.name),
        draft.price,
        encode_component(draft.imageurl.as_deref().unwrap_or(""))
    )
}

pub fn update_item(id: i64) -> String {
    format!("/update/{}", id)
}

pub fn delete_item(id: i64) -> String {
    format!("/delete/{}", id)
}
