//! Shared UI building blocks

mod company_modal;
mod company_table;
mod confirm_modal;
mod language_switcher;
mod layout;
mod pagination;
mod spinner;
mod text_field;
mod toast;
mod toggle;

pub use company_modal::CompanyModal;
pub use company_table::CompaniesTable;
pub use confirm_modal::{ConfirmationModal, ModalVariant};
pub use language_switcher::LanguageSwitcher;
pub use layout::{DashboardLayout, Sidebar};
pub use pagination::PaginationBar;
pub use spinner::{InlineSpinner, LoadingSpinner};
pub use text_field::TextField;
pub use toast::{use_toast, Toast, ToastAction, ToastHandle, ToastKind, ToastList, ToastProvider};
pub use toggle::Toggle;
