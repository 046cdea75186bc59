//! SalesClose admin console
//!
//! Yew single page application. Session state lives in one
//! [`auth::SessionManager`] created by the [`auth::AuthProvider`]; every REST
//! call goes through the shared clients in [`client`].

pub mod app;
pub mod auth;
pub mod browser;
pub mod client;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod services;

pub use app::{App, Route};
