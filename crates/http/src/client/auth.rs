//! Authentication endpoints

use super::{ClientError, Ignored, typed::PublicApiClient};
use crate::types::{
    AuthTokens, ForgotPasswordRequest, LoginRequest, RefreshRequest, ResetPasswordRequest,
};
use salesclose_core::{SessionGrant, TokenRenewal};

impl PublicApiClient {
    /// Exchange credentials for a session
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionGrant, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&body);
        let tokens: AuthTokens = self.execute(req).await?;

        tokens
            .into_grant(email)
            .ok_or(ClientError::MissingToken("a session token"))
    }

    /// Trade a refresh token for new credentials
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenRenewal, ClientError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let req = self
            .request(reqwest::Method::POST, "/auth/refresh")
            .json(&body);
        let tokens: AuthTokens = self.execute(req).await?;

        tokens
            .into_renewal(refresh_token)
            .ok_or(ClientError::MissingToken("a renewed token"))
    }

    /// Ask the server to email a reset link
    pub async fn forgot_password(&self, email: &str) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/forgot-password")
            .json(&ForgotPasswordRequest {
                email: email.to_string(),
            });
        self.execute::<Ignored>(req).await.map(|_| ())
    }

    /// Set a new password using the token from the reset link
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/reset-password")
            .json(&ResetPasswordRequest {
                token: token.to_string(),
                new_password: new_password.to_string(),
                confirm_password: confirm_password.to_string(),
            });
        self.execute::<Ignored>(req).await.map(|_| ())
    }
}
