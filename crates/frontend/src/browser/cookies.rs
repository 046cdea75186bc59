//! `document.cookie` access

use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

fn html_document() -> Option<HtmlDocument> {
    document().dyn_into::<HtmlDocument>().ok()
}

/// The full cookie header, empty when unavailable
pub fn cookie_header() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

/// Write one assignment such as `name=value; path=/; max-age=60`.
pub fn write_cookie(assignment: &str) {
    let Some(doc) = html_document() else {
        tracing::warn!("No HTML document to write cookies to");
        return;
    };
    if let Err(e) = doc.set_cookie(assignment) {
        tracing::warn!(?e, "Failed to write cookie");
    }
}
