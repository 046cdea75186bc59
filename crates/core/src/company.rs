//! Company records exchanged with the user endpoints

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StatusRepr", into = "u8")]
pub enum CompanyStatus {
    #[default]
    Inactive,
    Active,
}

impl CompanyStatus {
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Numeric code used by the status endpoint
    pub fn code(self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    pub fn toggled(self) -> Self {
        Self::from_active(!self.is_active())
    }
}

impl From<CompanyStatus> for u8 {
    fn from(status: CompanyStatus) -> Self {
        status.code()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Code(i64),
    Flag(bool),
}

impl From<StatusRepr> for CompanyStatus {
    fn from(repr: StatusRepr) -> Self {
        match repr {
            StatusRepr::Code(1) | StatusRepr::Flag(true) => Self::Active,
            StatusRepr::Code(0) | StatusRepr::Flag(false) => Self::Inactive,
            // One odd row must not sink the whole page
            StatusRepr::Code(other) => {
                tracing::warn!(status = other, "unknown company status, treating as inactive");
                Self::Inactive
            }
        }
    }
}

/// A company tenant as listed by `GET /user` or loaded by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub company_name: String,
    #[serde(default, alias = "email")]
    pub company_email: String,
    #[serde(default, alias = "contactPersonName")]
    pub contact_person: String,
    #[serde(default, alias = "contactPersonPhone")]
    pub contact_phone: String,
    #[serde(default)]
    pub status: CompanyStatus,
    #[serde(default, alias = "logoUrl", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siren_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naf_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_status: Option<String>,
    #[serde(default, alias = "workForceSize", skip_serializing_if = "Option::is_none")]
    pub workforce_size: Option<String>,
}

impl Company {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Logo to render, ignoring empty strings
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }

    /// First letters of the first two words, upper-cased
    pub fn initials(&self) -> String {
        self.company_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// One page of `GET /user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPage {
    #[serde(default)]
    pub data: Vec<Company>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Body of `POST /user` for both create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub logo: String,
    pub siren_number: String,
    pub legal_name: String,
    pub address: String,
    pub naf_code: String,
    pub legal_status: String,
    pub work_force_size: String,
}

/// Body of `PUT /user/user-credentials`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CredentialsUpdate {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CredentialsUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsUpdate")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Aggregate counts from `GET /user/current-user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub active_companies: u64,
}

impl DashboardData {
    pub fn inactive_companies(&self) -> u64 {
        self.total_companies.saturating_sub(self.active_companies)
    }

    pub fn display_name(&self) -> &str {
        if self.user_name.is_empty() {
            "User"
        } else {
            &self.user_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_row_deserializes() {
        let company: Company = serde_json::from_value(json!({
            "id": 42,
            "companyName": "Acme Industries",
            "companyEmail": "contact@acme.fr",
            "contactPerson": "Jean Dupont",
            "contactPhone": "0612345678",
            "status": 1
        }))
        .unwrap();

        assert_eq!(company.id, "42");
        assert!(company.is_active());
        assert_eq!(company.logo(), None);
        assert_eq!(company.initials(), "AI");
    }

    #[test]
    fn detail_shape_is_accepted_through_aliases() {
        let company: Company = serde_json::from_value(json!({
            "id": "c-7",
            "name": "solo",
            "email": "solo@example.com",
            "contactPersonName": "Marie",
            "contactPersonPhone": "+33 6 12 34 56 78",
            "status": false,
            "logoUrl": "",
            "workForceSize": "10-49",
            "nafCode": "62.01Z"
        }))
        .unwrap();

        assert_eq!(company.company_name, "solo");
        assert_eq!(company.contact_person, "Marie");
        assert_eq!(company.status, CompanyStatus::Inactive);
        assert_eq!(company.logo(), None);
        assert_eq!(company.workforce_size.as_deref(), Some("10-49"));
        assert_eq!(company.initials(), "S");
    }

    #[test]
    fn unknown_status_code_reads_as_inactive() {
        let company: Company = serde_json::from_value(json!({"id": 1, "status": 7})).unwrap();
        assert_eq!(company.status, CompanyStatus::Inactive);
    }

    #[test]
    fn page_survives_row_with_unknown_status() {
        let page: CompanyPage = serde_json::from_value(json!({
            "data": [{"id": 1, "status": 1}, {"id": 2, "status": 2}],
            "totalPages": 1
        }))
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].status, CompanyStatus::Active);
        assert_eq!(page.data[1].status, CompanyStatus::Inactive);
    }

    #[test]
    fn status_toggles_and_codes() {
        assert_eq!(CompanyStatus::Active.toggled(), CompanyStatus::Inactive);
        assert_eq!(CompanyStatus::Inactive.code(), 0);
        assert_eq!(serde_json::to_value(CompanyStatus::Active).unwrap(), json!(1));
    }

    #[test]
    fn page_without_total_pages() {
        let page: CompanyPage = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, None);
    }

    #[test]
    fn payload_uses_wire_names() {
        let payload = CompanyPayload {
            full_name: "Jean".to_string(),
            company_name: "Acme".to_string(),
            work_force_size: "50+".to_string(),
            ..CompanyPayload::default()
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["fullName"], "Jean");
        assert_eq!(value["workForceSize"], "50+");
        assert!(value.get("id").is_none());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn inactive_count_never_underflows() {
        let data = DashboardData {
            total_companies: 3,
            active_companies: 5,
            ..DashboardData::default()
        };
        assert_eq!(data.inactive_companies(), 0);
        assert_eq!(data.display_name(), "User");
    }

    #[test]
    fn credentials_debug_hides_password() {
        let update = CredentialsUpdate {
            id: "1".to_string(),
            email: "a@b.co".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(!format!("{update:?}").contains("hunter22"));
    }
}
