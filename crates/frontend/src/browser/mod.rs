//! Thin wrappers over the browser APIs the console touches

pub mod activity;
pub mod cookies;
pub mod storage;
pub mod timers;

use gloo_utils::window;

/// Leave the single page app and load `route` from scratch.
pub fn hard_navigate(route: &str) {
    if let Err(e) = window().location().set_href(route) {
        tracing::warn!(?e, route, "Navigation failed");
    }
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        tracing::warn!(?e, "Reload failed");
    }
}

/// `navigator.language`, e.g. `fr-FR`
pub fn browser_language() -> String {
    window().navigator().language().unwrap_or_default()
}
