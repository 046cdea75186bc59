//! Company management endpoints

use super::{ClientError, Ignored, typed::AuthenticatedApiClient};
use crate::types::DataEnvelope;
use reqwest::Method;
use salesclose_core::{
    Company, CompanyPage, CompanyPayload, CompanyStatus, CredentialsUpdate, DashboardData,
    PageCursor,
};

impl AuthenticatedApiClient {
    /// One page of companies for the cursor's page and search term
    pub async fn list_companies(&self, cursor: &PageCursor) -> Result<CompanyPage, ClientError> {
        let req = self.request(Method::GET, "/user").query(&cursor.query());
        self.execute(req).await
    }

    /// Aggregate counts for the dashboard
    pub async fn current_user(&self) -> Result<DashboardData, ClientError> {
        let req = self.request(Method::GET, "/user/current-user");
        let envelope: DataEnvelope<DashboardData> = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// Full profile of one company
    pub async fn company_by_id(&self, id: &str) -> Result<Company, ClientError> {
        let req = self
            .request(Method::GET, "/user/user-by-id")
            .query(&[("id", id)]);
        let envelope: DataEnvelope<Company> = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// Create a company, or update it when the payload carries an id
    pub async fn save_company(&self, payload: &CompanyPayload) -> Result<(), ClientError> {
        let req = self.request(Method::POST, "/user").json(payload);
        self.execute::<Ignored>(req).await.map(|_| ())
    }

    pub async fn set_company_status(
        &self,
        id: &str,
        status: CompanyStatus,
    ) -> Result<(), ClientError> {
        let req = self
            .request(Method::PUT, "/user")
            .query(&[("id", id.to_string()), ("status", status.code().to_string())]);
        self.execute::<Ignored>(req).await.map(|_| ())
    }

    pub async fn update_credentials(&self, update: &CredentialsUpdate) -> Result<(), ClientError> {
        let req = self
            .request(Method::PUT, "/user/user-credentials")
            .json(update);
        self.execute::<Ignored>(req).await.map(|_| ())
    }

    pub async fn delete_company(&self, id: &str) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, &format!("/user/{id}"));
        self.execute::<Ignored>(req).await.map(|_| ())
    }
}
