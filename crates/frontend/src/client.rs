//! Shared API clients

pub use salesclose_http::client::error::ClientError;
use salesclose_core::ConsoleConfig;
use salesclose_http::{AuthenticatedApiClient, PublicApiClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use web_sys::window;

static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicApiClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthenticatedApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Origin of the page plus the API prefix
fn api_base_url() -> String {
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{}", ConsoleConfig::API_BASE_PATH)
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ClientError> {
    mutex
        .lock()
        .map_err(|_| ClientError::Configuration("client lock poisoned".into()))
}

/// Client for the auth endpoints
pub fn public_client() -> Result<PublicApiClient, ClientError> {
    let mut client_lock = lock(&PUBLIC_CLIENT)?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(api_base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Client carrying the current bearer token, `None` when signed out
pub fn authenticated_client() -> Result<Option<AuthenticatedApiClient>, ClientError> {
    Ok(lock(&AUTH_CLIENT)?.clone())
}

/// Swap the bearer token used by [`authenticated_client`].
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = lock(&AUTH_CLIENT)?;

    *auth_lock = match token {
        Some(token) => Some(public_client()?.authenticate(token)),
        None => None,
    };

    Ok(())
}
