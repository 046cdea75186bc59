//! Services wrapping the REST endpoints used by the pages

pub mod auth;
pub mod company;

pub use auth::AuthService;
pub use company::CompanyService;
