//! SalesClose HTTP module
//!
//! Wire types for the admin REST API and, behind the `client` feature, the
//! reqwest based client the console talks to it with.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{AuthenticatedApiClient, ClientError, PublicApiClient, TypedClientBuilder};
