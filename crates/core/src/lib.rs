//! SalesClose admin console core types and session logic
//!
//! Everything in this crate is independent of the browser so it can be
//! exercised by native unit tests. The frontend crate supplies the storage
//! backend and timer driver implementations.

pub mod company;
pub mod config;
pub mod cookies;
pub mod error;
pub mod form;
pub mod lifecycle;
pub mod locale;
pub mod pagination;
pub mod session;
pub mod validation;

pub use company::{
    Company, CompanyPage, CompanyPayload, CompanyStatus, CredentialsUpdate, DashboardData,
};
pub use config::{ConsoleConfig, SessionConfig};
pub use error::{CoreError, Result};
pub use form::{CompanyForm, FormField, FormMode, FormTab};
pub use lifecycle::{
    LogoutReason, RefreshStep, RefreshTicket, SessionController, SessionState, TimerDriver,
    TimerKind, Transition,
};
pub use locale::{Locale, Text};
pub use pagination::{PageCursor, RequestGeneration};
pub use session::{
    AuthStore, MemoryStorage, PersistenceTarget, Session, SessionGrant, StorageBackend,
    TokenRenewal, User,
};
