//! Company create/edit wizard state
//!
//! The form is split over three tabs. Moving forward only happens when the
//! current tab validates; saving validates every tab and lands on the first
//! one with errors.

use crate::company::{Company, CompanyPayload, CredentialsUpdate};
use crate::validation::{
    is_valid_email, is_valid_phone_number, validate_required_fields, FieldErrors,
    INVALID_EMAIL_MESSAGE, INVALID_PHONE_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
};
use std::collections::HashMap;

/// Key under which a server-side failure is reported
pub const API_ERROR_KEY: &str = "api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormTab {
    BasicInfo,
    Details,
    LoginCredentials,
}

impl FormTab {
    pub const ALL: [FormTab; 3] = [Self::BasicInfo, Self::Details, Self::LoginCredentials];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::Details),
            Self::Details => Some(Self::LoginCredentials),
            Self::LoginCredentials => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::Details => Some(Self::BasicInfo),
            Self::LoginCredentials => Some(Self::Details),
        }
    }

    pub fn fields(self) -> &'static [FormField] {
        use FormField::*;
        match self {
            Self::BasicInfo => &[Logo, Name, ContactPersonName, ContactPersonPhone],
            Self::Details => &[SirenNumber, LegalName, Address, NafCode, LegalStatus, WorkforceSize],
            Self::LoginCredentials => &[Email, Password, ConfirmPassword],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Logo,
    Name,
    ContactPersonName,
    ContactPersonPhone,
    SirenNumber,
    LegalName,
    Address,
    NafCode,
    LegalStatus,
    WorkforceSize,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    const ALL: [FormField; 13] = [
        Self::Logo,
        Self::Name,
        Self::ContactPersonName,
        Self::ContactPersonPhone,
        Self::SirenNumber,
        Self::LegalName,
        Self::Address,
        Self::NafCode,
        Self::LegalStatus,
        Self::WorkforceSize,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Name used for error lookups
    pub fn key(self) -> &'static str {
        match self {
            Self::Logo => "logoUrl",
            Self::Name => "name",
            Self::ContactPersonName => "contactPersonName",
            Self::ContactPersonPhone => "contactPersonPhone",
            Self::SirenNumber => "sirenNumber",
            Self::LegalName => "legalName",
            Self::Address => "address",
            Self::NafCode => "nafCode",
            Self::LegalStatus => "legalStatus",
            Self::WorkforceSize => "workforceSize",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyForm {
    mode: FormMode,
    tab: FormTab,
    values: HashMap<FormField, String>,
    errors: FieldErrors,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::create()
    }
}

impl CompanyForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            tab: FormTab::BasicInfo,
            values: HashMap::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Pre-fill the form from a loaded company. Passwords start blank.
    pub fn edit(company: &Company) -> Self {
        let mut form = Self {
            mode: FormMode::Edit {
                id: company.id.clone(),
            },
            ..Self::create()
        };

        let optional = |value: &Option<String>| value.clone().unwrap_or_default();
        form.values.extend([
            (FormField::Name, company.company_name.clone()),
            (FormField::Email, company.company_email.clone()),
            (FormField::ContactPersonName, company.contact_person.clone()),
            (FormField::ContactPersonPhone, company.contact_phone.clone()),
            (FormField::Logo, optional(&company.logo)),
            (FormField::SirenNumber, optional(&company.siren_number)),
            (FormField::LegalName, optional(&company.legal_name)),
            (FormField::Address, optional(&company.address)),
            (FormField::NafCode, optional(&company.naf_code)),
            (FormField::LegalStatus, optional(&company.legal_status)),
            (FormField::WorkforceSize, optional(&company.workforce_size)),
        ]);
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn tab(&self) -> FormTab {
        self.tab
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Update a field and clear its error.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(field.key());
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    pub fn api_error(&self) -> Option<&str> {
        self.errors.get(API_ERROR_KEY).map(String::as_str)
    }

    pub fn set_api_error(&mut self, message: impl Into<String>) {
        self.errors.insert(API_ERROR_KEY.to_string(), message.into());
    }

    pub fn required_fields(&self, tab: FormTab) -> &'static [FormField] {
        match tab {
            FormTab::BasicInfo => &[
                FormField::Name,
                FormField::ContactPersonName,
                FormField::ContactPersonPhone,
            ],
            FormTab::Details => &[],
            FormTab::LoginCredentials if self.is_edit() => &[FormField::Email],
            FormTab::LoginCredentials => &[
                FormField::Email,
                FormField::Password,
                FormField::ConfirmPassword,
            ],
        }
    }

    pub fn is_required(&self, field: FormField) -> bool {
        FormTab::ALL
            .iter()
            .any(|tab| self.required_fields(*tab).contains(&field))
    }

    fn tab_errors(&self, tab: FormTab) -> FieldErrors {
        let keys: Vec<&str> = self.required_fields(tab).iter().map(|f| f.key()).collect();
        let mut errors =
            validate_required_fields(|key| FormField::from_key(key).map(|f| self.value(f)), &keys);

        match tab {
            FormTab::BasicInfo => {
                let phone = self.value(FormField::ContactPersonPhone);
                if !phone.is_empty() && !is_valid_phone_number(phone) {
                    errors.insert(
                        FormField::ContactPersonPhone.key().to_string(),
                        INVALID_PHONE_MESSAGE.to_string(),
                    );
                }
            }
            FormTab::Details => {}
            FormTab::LoginCredentials => {
                let email = self.value(FormField::Email);
                if !email.is_empty() && !is_valid_email(email) {
                    errors.insert(
                        FormField::Email.key().to_string(),
                        INVALID_EMAIL_MESSAGE.to_string(),
                    );
                }

                let password = self.value(FormField::Password);
                let confirm = self.value(FormField::ConfirmPassword);
                let check_match = !self.is_edit() || !password.is_empty();
                if check_match && password != confirm {
                    errors.insert(
                        FormField::ConfirmPassword.key().to_string(),
                        PASSWORD_MISMATCH_MESSAGE.to_string(),
                    );
                }
            }
        }
        errors
    }

    /// Validate one tab, replacing the visible errors with its result.
    pub fn validate_tab(&mut self, tab: FormTab) -> bool {
        self.errors = self.tab_errors(tab);
        self.errors.is_empty()
    }

    /// Advance when the current tab is valid.
    pub fn next(&mut self) -> bool {
        if !self.validate_tab(self.tab) {
            return false;
        }
        match self.tab.next() {
            Some(tab) => {
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        if let Some(tab) = self.tab.prev() {
            self.tab = tab;
        }
    }

    pub fn select_tab(&mut self, tab: FormTab) {
        self.tab = tab;
    }

    /// Build the save body, or move to the first tab with errors.
    pub fn payload(&mut self) -> Option<CompanyPayload> {
        for tab in FormTab::ALL {
            if !self.validate_tab(tab) {
                self.tab = tab;
                return None;
            }
        }

        let text = |field| self.value(field).trim().to_string();
        let (id, password) = match &self.mode {
            FormMode::Create => (None, Some(self.value(FormField::Password).to_string())),
            FormMode::Edit { id } => (Some(id.clone()), None),
        };

        Some(CompanyPayload {
            id,
            full_name: text(FormField::ContactPersonName),
            company_name: text(FormField::Name),
            email: text(FormField::Email),
            phone_no: text(FormField::ContactPersonPhone),
            password,
            logo: self.value(FormField::Logo).to_string(),
            siren_number: text(FormField::SirenNumber),
            legal_name: text(FormField::LegalName),
            address: text(FormField::Address),
            naf_code: text(FormField::NafCode),
            legal_status: text(FormField::LegalStatus),
            work_force_size: text(FormField::WorkforceSize),
        })
    }

    /// Credential change to send after an edit, when a new password was typed.
    pub fn credentials_update(&self) -> Option<CredentialsUpdate> {
        let FormMode::Edit { id } = &self.mode else {
            return None;
        };
        let password = self.value(FormField::Password);
        if password.is_empty() {
            return None;
        }
        Some(CredentialsUpdate {
            id: id.clone(),
            email: self.value(FormField::Email).trim().to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompanyStatus;
    use crate::validation::REQUIRED_MESSAGE;

    fn fill_basic(form: &mut CompanyForm) {
        form.set(FormField::Name, "Acme");
        form.set(FormField::ContactPersonName, "Jean Dupont");
        form.set(FormField::ContactPersonPhone, "06 12 34 56 78");
    }

    fn company() -> Company {
        Company {
            id: "17".to_string(),
            company_name: "Acme".to_string(),
            company_email: "contact@acme.fr".to_string(),
            contact_person: "Jean Dupont".to_string(),
            contact_phone: "0612345678".to_string(),
            status: CompanyStatus::Active,
            logo: None,
            siren_number: Some("123456789".to_string()),
            legal_name: None,
            address: None,
            naf_code: None,
            legal_status: None,
            workforce_size: Some("10-49".to_string()),
        }
    }

    #[test]
    fn next_is_blocked_by_missing_fields() {
        let mut form = CompanyForm::create();
        assert!(!form.next());
        assert_eq!(form.tab(), FormTab::BasicInfo);
        assert_eq!(form.error(FormField::Name), Some(REQUIRED_MESSAGE));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn invalid_phone_is_reported() {
        let mut form = CompanyForm::create();
        fill_basic(&mut form);
        form.set(FormField::ContactPersonPhone, "123");

        assert!(!form.next());
        assert_eq!(
            form.error(FormField::ContactPersonPhone),
            Some(INVALID_PHONE_MESSAGE)
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = CompanyForm::create();
        form.next();
        form.set(FormField::Name, "Acme");
        assert_eq!(form.error(FormField::Name), None);
        assert!(form.error(FormField::ContactPersonName).is_some());
    }

    #[test]
    fn walks_through_tabs() {
        let mut form = CompanyForm::create();
        fill_basic(&mut form);

        assert!(form.next());
        assert_eq!(form.tab(), FormTab::Details);
        assert!(form.next());
        assert_eq!(form.tab(), FormTab::LoginCredentials);
        form.back();
        assert_eq!(form.tab(), FormTab::Details);
    }

    #[test]
    fn create_requires_matching_passwords() {
        let mut form = CompanyForm::create();
        fill_basic(&mut form);
        form.set(FormField::Email, "contact@acme.fr");
        form.set(FormField::Password, "secret-1");
        form.set(FormField::ConfirmPassword, "secret-2");

        assert!(form.payload().is_none());
        assert_eq!(form.tab(), FormTab::LoginCredentials);
        assert_eq!(
            form.error(FormField::ConfirmPassword),
            Some(PASSWORD_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn save_jumps_to_first_invalid_tab() {
        let mut form = CompanyForm::create();
        form.select_tab(FormTab::LoginCredentials);
        form.set(FormField::Email, "contact@acme.fr");
        form.set(FormField::Password, "secret-1");
        form.set(FormField::ConfirmPassword, "secret-1");

        assert!(form.payload().is_none());
        assert_eq!(form.tab(), FormTab::BasicInfo);
    }

    #[test]
    fn create_payload_maps_wire_fields() {
        let mut form = CompanyForm::create();
        fill_basic(&mut form);
        form.set(FormField::Email, " contact@acme.fr ");
        form.set(FormField::Password, "secret-1");
        form.set(FormField::ConfirmPassword, "secret-1");
        form.set(FormField::WorkforceSize, "50+");

        let payload = form.payload().expect("form is valid");
        assert_eq!(payload.id, None);
        assert_eq!(payload.full_name, "Jean Dupont");
        assert_eq!(payload.company_name, "Acme");
        assert_eq!(payload.email, "contact@acme.fr");
        assert_eq!(payload.phone_no, "06 12 34 56 78");
        assert_eq!(payload.password.as_deref(), Some("secret-1"));
        assert_eq!(payload.work_force_size, "50+");
    }

    #[test]
    fn edit_prefills_and_keeps_password_optional() {
        let mut form = CompanyForm::edit(&company());
        assert!(form.is_edit());
        assert_eq!(form.value(FormField::SirenNumber), "123456789");
        assert!(!form.is_required(FormField::Password));

        let payload = form.payload().expect("prefilled form is valid");
        assert_eq!(payload.id.as_deref(), Some("17"));
        assert_eq!(payload.password, None);
        assert_eq!(form.credentials_update(), None);
    }

    #[test]
    fn edit_with_new_password_yields_credentials_update() {
        let mut form = CompanyForm::edit(&company());
        form.set(FormField::Password, "new-secret");
        form.set(FormField::ConfirmPassword, "new-secret");

        assert!(form.payload().is_some());
        let update = form.credentials_update().expect("password was entered");
        assert_eq!(update.id, "17");
        assert_eq!(update.email, "contact@acme.fr");
        assert_eq!(update.password, "new-secret");
    }

    #[test]
    fn field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
    }
}
