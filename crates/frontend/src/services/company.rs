//! Company management service

use crate::client::{authenticated_client, ClientError};
use salesclose_core::{
    Company, CompanyPage, CompanyPayload, CompanyStatus, CredentialsUpdate, DashboardData,
    PageCursor,
};
use salesclose_http::AuthenticatedApiClient;

#[derive(Clone, Default, PartialEq)]
pub struct CompanyService;

impl CompanyService {
    pub fn new() -> Self {
        Self
    }

    fn client(&self) -> Result<AuthenticatedApiClient, ClientError> {
        authenticated_client()?
            .ok_or_else(|| ClientError::Configuration("Not authenticated".into()))
    }

    /// List one page of companies
    pub async fn list(&self, cursor: &PageCursor) -> Result<CompanyPage, ClientError> {
        self.client()?.list_companies(cursor).await
    }

    pub async fn dashboard(&self) -> Result<DashboardData, ClientError> {
        self.client()?.current_user().await
    }

    pub async fn get(&self, id: &str) -> Result<Company, ClientError> {
        self.client()?.company_by_id(id).await
    }

    /// Save the company, then the new credentials if any were entered
    pub async fn save(
        &self,
        payload: &CompanyPayload,
        credentials: Option<&CredentialsUpdate>,
    ) -> Result<(), ClientError> {
        let client = self.client()?;
        client.save_company(payload).await?;
        if let Some(credentials) = credentials {
            client.update_credentials(credentials).await?;
        }
        Ok(())
    }

    pub async fn set_status(&self, id: &str, status: CompanyStatus) -> Result<(), ClientError> {
        self.client()?.set_company_status(id, status).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client()?.delete_company(id).await
    }
}
