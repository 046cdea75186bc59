//! Routed pages

mod companies;
mod dashboard;
mod forgot_password;
mod login;
mod new_password;

pub use companies::CompaniesPage;
pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use new_password::NewPasswordPage;
