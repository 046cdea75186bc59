//! Client-side form validation
//!
//! Field errors are keyed by the wire name of the field so the view can look
//! them up next to each input.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 8 characters";

pub const MIN_PASSWORD_LENGTH: usize = 8;
const MIN_PHONE_DIGITS: usize = 8;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Applied to the digits of the input only
static PHONE_DIGITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\(?\d{2,4}\)?[ -]?)?\d{3,4}[ -]?\d{3,4}$").expect("phone pattern is valid")
});

/// Field name to error message
pub type FieldErrors = BTreeMap<String, String>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts 8 to 12 digits with any punctuation, spacing or leading `+`.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    digits.len() >= MIN_PHONE_DIGITS && PHONE_DIGITS_RE.is_match(&digits)
}

/// Report every field in `required` whose value is missing or empty.
pub fn validate_required_fields<'a, F>(lookup: F, required: &[&str]) -> FieldErrors
where
    F: Fn(&str) -> Option<&'a str>,
{
    required
        .iter()
        .copied()
        .filter(|field| !matches!(lookup(field), Some(value) if !value.is_empty()))
        .map(|field| (field.to_string(), REQUIRED_MESSAGE.to_string()))
        .collect()
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if email.trim().is_empty() {
        errors.insert("email".to_string(), REQUIRED_MESSAGE.to_string());
    } else if !is_valid_email(email.trim()) {
        errors.insert("email".to_string(), INVALID_EMAIL_MESSAGE.to_string());
    }
    if password.is_empty() {
        errors.insert("password".to_string(), REQUIRED_MESSAGE.to_string());
    }
    errors
}

pub fn validate_email_field(email: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if email.trim().is_empty() {
        errors.insert("email".to_string(), REQUIRED_MESSAGE.to_string());
    } else if !is_valid_email(email.trim()) {
        errors.insert("email".to_string(), INVALID_EMAIL_MESSAGE.to_string());
    }
    errors
}

pub fn validate_new_password(password: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if password.is_empty() {
        errors.insert("password".to_string(), REQUIRED_MESSAGE.to_string());
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            "password".to_string(),
            PASSWORD_TOO_SHORT_MESSAGE.to_string(),
        );
    }
    if confirm.is_empty() {
        errors.insert("confirmPassword".to_string(), REQUIRED_MESSAGE.to_string());
    } else if password != confirm {
        errors.insert(
            "confirmPassword".to_string(),
            PASSWORD_MISMATCH_MESSAGE.to_string(),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sales-close.fr"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone_number("+1 415-555-2671"));
        assert!(is_valid_phone_number("06 12 34 56 78"));
        assert!(is_valid_phone_number("(01) 2345-6789"));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("1234567"));
        assert!(!is_valid_phone_number("1234567890123"));
        assert!(!is_valid_phone_number("phone"));
    }

    #[test]
    fn required_fields_treat_empty_as_missing() {
        let form: HashMap<&str, &str> = [("name", "Acme"), ("contactPersonName", "")]
            .into_iter()
            .collect();

        let errors = validate_required_fields(
            |field| form.get(field).copied(),
            &["name", "contactPersonName", "contactPersonPhone"],
        );

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["contactPersonName"], REQUIRED_MESSAGE);
        assert_eq!(errors["contactPersonPhone"], REQUIRED_MESSAGE);
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn login_checks_presence_then_format() {
        let errors = validate_login("", "");
        assert_eq!(errors["email"], REQUIRED_MESSAGE);
        assert_eq!(errors["password"], REQUIRED_MESSAGE);

        let errors = validate_login("admin@", "secret");
        assert_eq!(errors["email"], INVALID_EMAIL_MESSAGE);
        assert!(!errors.contains_key("password"));

        assert!(validate_login("admin@salesclose.fr", "secret").is_empty());
    }

    #[test]
    fn new_password_rules() {
        let errors = validate_new_password("short", "short");
        assert_eq!(errors["password"], PASSWORD_TOO_SHORT_MESSAGE);

        let errors = validate_new_password("long enough", "different");
        assert_eq!(errors["confirmPassword"], PASSWORD_MISMATCH_MESSAGE);

        assert!(validate_new_password("long enough", "long enough").is_empty());
    }
}
