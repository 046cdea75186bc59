//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, USER_AGENT};
use reqwest::{Client, ClientBuilder, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the public auth endpoints
#[derive(Clone)]
pub struct PublicApiClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that need the administrator's bearer token
#[derive(Clone)]
pub struct AuthenticatedApiClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

impl PublicApiClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_client(timeout)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode the success body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        super::execute(request).await
    }

    /// Attach a bearer token
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedApiClient {
        AuthenticatedApiClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedApiClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer token attached
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode the success body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        super::execute(request).await
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL, including the `/api` prefix
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicApiClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedApiClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}
