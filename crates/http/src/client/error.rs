//! Client error types

use super::normalize::{GENERIC_MESSAGE, NO_RESPONSE_MESSAGE};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A token endpoint answered without a token
    #[error("Response did not include {0}")]
    MissingToken(&'static str),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and an already normalized message
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Single line suitable for inline errors and toasts
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => message.clone(),
            Self::Request(_) => NO_RESPONSE_MESSAGE.to_string(),
            Self::Configuration(message) => message.clone(),
            Self::MissingToken(_) => self.to_string(),
            Self::Serialization(_) => GENERIC_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_status_codes() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "expired".into());
        assert!(matches!(err, ClientError::AuthenticationFailed(_)));

        let err = ClientError::from_status(StatusCode::NOT_FOUND, "gone".into());
        assert!(matches!(err, ClientError::NotFound(_)));

        let err = ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "bad".into());
        assert!(matches!(err, ClientError::ServerError { status: 422, .. }));
        assert_eq!(err.user_message(), "bad");
    }

    #[test]
    fn configuration_message_is_shown_verbatim() {
        let err = ClientError::Configuration("Not authenticated".into());
        assert_eq!(err.user_message(), "Not authenticated");
    }
}
