//! Web Storage backend for the auth store

use salesclose_core::{ConsoleConfig, CoreError, PersistenceTarget, Result, StorageBackend};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn js_error(context: &str, e: JsValue) -> CoreError {
    CoreError::Storage(format!("{context}: {e:?}"))
}

/// `localStorage` or `sessionStorage`, picked by the persistence target
#[derive(Debug, Clone, Copy)]
pub struct WebStorage {
    target: PersistenceTarget,
}

impl WebStorage {
    pub fn new(target: PersistenceTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> PersistenceTarget {
        self.target
    }

    fn storage(&self) -> Result<Storage> {
        let window =
            web_sys::window().ok_or_else(|| CoreError::Storage("no window object".into()))?;
        let storage = match self.target {
            PersistenceTarget::Durable => window.local_storage(),
            PersistenceTarget::SessionScoped => window.session_storage(),
        };
        storage
            .map_err(|e| js_error("storage access denied", e))?
            .ok_or_else(|| CoreError::Storage("storage unavailable".into()))
    }
}

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| js_error("read failed", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_error("write failed", e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| js_error("remove failed", e))
    }
}

/// Remember the protected route a signed-out visitor tried to open.
pub fn remember_last_route(path: &str) {
    let storage = WebStorage::new(PersistenceTarget::Durable);
    if let Err(e) = storage.set(ConsoleConfig::LAST_ROUTE_KEY, path) {
        tracing::debug!(error = %e, "Could not remember last route");
    }
}

/// The remembered route, removed from storage once read
pub fn take_last_route() -> Option<String> {
    let storage = WebStorage::new(PersistenceTarget::Durable);
    let route = storage.get(ConsoleConfig::LAST_ROUTE_KEY).ok().flatten()?;
    let _ = storage.remove(ConsoleConfig::LAST_ROUTE_KEY);
    Some(route)
}
