//! Sign-in and password reset service

use crate::client::{public_client, ClientError};
use salesclose_core::{SessionGrant, TokenRenewal};

#[derive(Clone, Default, PartialEq)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionGrant, ClientError> {
        public_client()?.login(email.trim(), password).await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenRenewal, ClientError> {
        public_client()?.refresh(refresh_token).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), ClientError> {
        public_client()?.forgot_password(email.trim()).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        public_client()?
            .reset_password(token, new_password, confirm_password)
            .await
    }
}
