//! SalesClose REST client
//!
//! Every call goes through [`execute`], which decodes success bodies,
//! normalizes error bodies into one message and fires the global
//! deauthorization hooks on 401/404.

pub mod auth;
pub mod company;
pub mod error;
pub mod hooks;
pub mod normalize;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedApiClient, PublicApiClient, TypedClientBuilder};

use serde::de::DeserializeOwned;
use serde_json::Value;

const USER_AGENT: &str = "salesclose-console/0.1.0";

/// Send `request` and decode the JSON success body.
///
/// An empty success body decodes as JSON `null`, so `()` and `Option<T>`
/// work for endpoints that return nothing.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "API request got no response");
            return Err(e.into());
        }
    };
    let status = response.status();
    let body = response.text().await;

    if status.is_success() {
        let body = body?;
        if body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        return Ok(serde_json::from_str(&body)?);
    }

    let message = normalize::normalize_error_body(status.as_u16(), &body.unwrap_or_default());
    tracing::warn!(status = status.as_u16(), error = %message, "API request failed");

    if matches!(status.as_u16(), 401 | 404) {
        hooks::trigger_unauthorized(status.as_u16());
    }

    Err(ClientError::from_status(status, message))
}

/// Success body the caller does not need
#[derive(Debug, Default, serde::Deserialize)]
#[serde(from = "Value")]
pub(crate) struct Ignored;

impl From<Value> for Ignored {
    fn from(_: Value) -> Self {
        Self
    }
}
