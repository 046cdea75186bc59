//! Wire types for the auth endpoints

use salesclose_core::{SessionConfig, SessionGrant, TokenRenewal, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;


#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest").finish_non_exhaustive()
    }
}

/// Body returned by `/auth/login` and `/auth/refresh`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Minutes; login calls it `expirationTime`, refresh `expireTime`
    #[serde(default, alias = "expireTime")]
    pub expiration_time: Option<f64>,
}

impl AuthTokens {
    /// Token lifetime, defaulting to [`SessionConfig::DEFAULT_TOKEN_LIFETIME`]
    /// when missing or zero
    pub fn expire_in(&self) -> Duration {
        self.expiration_time
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
            .map_or(SessionConfig::DEFAULT_TOKEN_LIFETIME, |minutes| {
                Duration::from_secs_f64(minutes * 60.0)
            })
    }

    fn token(&self) -> Option<String> {
        self.jwt_token.clone().filter(|token| !token.is_empty())
    }

    /// Session for the administrator who signed in with `email`.
    ///
    /// Returns `None` unless both tokens are present.
    pub fn into_grant(self, email: &str) -> Option<SessionGrant> {
        let token = self.token()?;
        let refresh_token = self.refresh_token.clone().filter(|t| !t.is_empty())?;
        let expire_in = self.expire_in();

        Some(SessionGrant {
            user: User {
                name: self.user_name.unwrap_or_else(|| email.to_string()),
                email: email.to_string(),
                user_type: self.user_type,
                profile: self.profile,
            },
            token,
            refresh_token,
            expire_in,
        })
    }

    /// Renewed credentials, reusing `current_refresh_token` when the server
    /// does not rotate it. Returns `None` without a new access token.
    pub fn into_renewal(self, current_refresh_token: &str) -> Option<TokenRenewal> {
        let token = self.token()?;
        let expire_in = self.expire_in();
        let refresh_token = self
            .refresh_token
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| current_refresh_token.to_string());

        Some(TokenRenewal {
            user_name: self.user_name.filter(|name| !name.is_empty()),
            token,
            refresh_token,
            expire_in,
        })
    }
}

/// `{ "data": ... }` wrapper used by the user endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesclose_core::Session;
    use serde_json::json;

    #[test]
    fn login_body_becomes_grant() {
        let tokens: AuthTokens = serde_json::from_value(json!({
            "userName": "Ada",
            "jwtToken": "jwt",
            "refreshToken": "refresh",
            "expirationTime": 30
        }))
        .unwrap();

        let grant = tokens.into_grant("ada@salesclose.fr").unwrap();
        assert_eq!(grant.user.name, "Ada");
        assert_eq!(grant.user.email, "ada@salesclose.fr");
        assert_eq!(grant.expire_in, Duration::from_secs(30 * 60));
    }

    #[test]
    fn missing_expiry_defaults_to_fifteen_minutes() {
        let tokens: AuthTokens =
            serde_json::from_value(json!({"jwtToken": "jwt", "expireTime": 0})).unwrap();
        assert_eq!(tokens.expire_in(), Duration::from_secs(15 * 60));
        assert_eq!(tokens.expire_in(), Session::default().expire_in());
    }

    #[test]
    fn grant_requires_tokens() {
        let tokens: AuthTokens = serde_json::from_value(json!({"userName": "Ada"})).unwrap();
        assert!(tokens.into_grant("ada@salesclose.fr").is_none());
    }

    #[test]
    fn renewal_keeps_refresh_token_when_not_rotated() {
        let tokens: AuthTokens =
            serde_json::from_value(json!({"jwtToken": "jwt-2", "expireTime": 5})).unwrap();
        let renewal = tokens.into_renewal("refresh-1").unwrap();

        assert_eq!(renewal.refresh_token, "refresh-1");
        assert_eq!(renewal.user_name, None);
        assert_eq!(renewal.expire_in, Duration::from_secs(5 * 60));
    }

    #[test]
    fn renewal_without_jwt_is_rejected() {
        let tokens: AuthTokens =
            serde_json::from_value(json!({"refreshToken": "refresh-2"})).unwrap();
        assert!(tokens.into_renewal("refresh-1").is_none());
    }

    #[test]
    fn refresh_request_is_camel_case() {
        let body = serde_json::to_value(RefreshRequest {
            refresh_token: "r".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"refreshToken": "r"}));
    }
}
