//! Integration tests for the SalesClose HTTP client

#![cfg(feature = "client")]

use salesclose_core::{CompanyPayload, CompanyStatus, CredentialsUpdate, PageCursor};
use salesclose_http::client::{
    AuthenticatedApiClient, PublicApiClient, TypedClientBuilder, error::ClientError, hooks,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every hook invocation for the current test thread
fn record_hooks() -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let logout_log = log.clone();
    let navigate_log = log.clone();
    hooks::set_logout_callback(Rc::new(move || logout_log.borrow_mut().push("logout".into())));
    hooks::set_navigate_callback(Rc::new(move |route: &str| {
        navigate_log.borrow_mut().push(format!("navigate:{route}"))
    }));
    log
}

fn authenticated(server: &MockServer) -> AuthenticatedApiClient {
    TypedClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated("jwt-token")
        .unwrap()
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:3000/api/")
        .timeout(Duration::from_secs(5))
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000/api");
}

#[tokio::test]
async fn test_login_returns_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "admin@salesclose.fr", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "userName": "Admin",
            "jwtToken": "jwt-1",
            "refreshToken": "refresh-1",
            "expirationTime": 15
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicApiClient::new(server.uri()).unwrap();
    let grant = client.login("admin@salesclose.fr", "secret").await.unwrap();

    assert_eq!(grant.token, "jwt-1");
    assert_eq!(grant.refresh_token, "refresh-1");
    assert_eq!(grant.user.name, "Admin");
    assert_eq!(grant.expire_in, Duration::from_secs(15 * 60));
}

#[tokio::test]
async fn test_login_without_token_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"userName": "Admin"})))
        .mount(&server)
        .await;

    let client = PublicApiClient::new(server.uri()).unwrap();
    let result = client.login("admin@salesclose.fr", "secret").await;
    assert!(matches!(result, Err(ClientError::MissingToken(_))));
}

#[tokio::test]
async fn test_refresh_sends_refresh_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refreshToken": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jwtToken": "jwt-2",
            "refreshToken": "refresh-2",
            "expireTime": 15
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PublicApiClient::new(server.uri()).unwrap();
    let renewal = client.refresh("refresh-1").await.unwrap();

    assert_eq!(renewal.token, "jwt-2");
    assert_eq!(renewal.refresh_token, "refresh-2");
}

#[tokio::test]
async fn test_unauthorized_fires_hooks_exactly_once() {
    let server = MockServer::start().await;
    let log = record_hooks();

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&server)
        .await;

    let result = authenticated(&server)
        .list_companies(&PageCursor::new())
        .await;

    match result {
        Err(err @ ClientError::AuthenticationFailed(_)) => {
            assert_eq!(err.user_message(), "Token expired")
        }
        other => panic!("expected authentication failure, got {other:?}"),
    }
    assert_eq!(
        *log.borrow(),
        vec!["logout".to_string(), "navigate:/login".to_string()]
    );
    hooks::clear_callbacks();
}

#[tokio::test]
async fn test_not_found_on_public_endpoint_fires_hooks() {
    let server = MockServer::start().await;
    let log = record_hooks();

    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = PublicApiClient::new(server.uri()).unwrap();
    let err = client.forgot_password("nobody@salesclose.fr").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.user_message(), "Not Found");
    assert_eq!(log.borrow().len(), 2);
    hooks::clear_callbacks();
}

#[tokio::test]
async fn test_server_error_does_not_log_out() {
    let server = MockServer::start().await;
    let log = record_hooks();

    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Email already exists", "Phone is invalid"]
        })))
        .mount(&server)
        .await;

    let err = authenticated(&server)
        .save_company(&CompanyPayload::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ServerError { status: 422, .. }));
    assert_eq!(err.user_message(), "Email already exists, Phone is invalid");
    assert!(log.borrow().is_empty());
    hooks::clear_callbacks();
}

#[tokio::test]
async fn test_list_sends_bearer_and_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer jwt-token"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .and(query_param("search", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 3,
                "companyName": "Acme",
                "companyEmail": "contact@acme.fr",
                "contactPerson": "Jean",
                "contactPhone": "0612345678",
                "status": 1
            }],
            "totalPages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cursor = PageCursor::new();
    cursor.set_search("acme");
    let page = authenticated(&server).list_companies(&cursor).await.unwrap();

    assert_eq!(page.total_pages, Some(3));
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "3");

    cursor.apply_total_pages(page.total_pages);
    assert!(cursor.go_to(3));
    assert_eq!(cursor.row_number(4), 25);
}

#[tokio::test]
async fn test_current_user_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/current-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "userName": "Admin",
                "profile": "SUPER_ADMIN",
                "totalCompanies": 12,
                "activeCompanies": 9
            }
        })))
        .mount(&server)
        .await;

    let data = authenticated(&server).current_user().await.unwrap();
    assert_eq!(data.user_name, "Admin");
    assert_eq!(data.inactive_companies(), 3);
}

#[tokio::test]
async fn test_company_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/user-by-id"))
        .and(query_param("id", "17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 17,
                "name": "Acme",
                "email": "contact@acme.fr",
                "contactPersonName": "Jean",
                "contactPersonPhone": "0612345678",
                "status": true,
                "sirenNumber": "123456789"
            }
        })))
        .mount(&server)
        .await;

    let company = authenticated(&server).company_by_id("17").await.unwrap();
    assert_eq!(company.company_name, "Acme");
    assert_eq!(company.siren_number.as_deref(), Some("123456789"));
    assert!(company.is_active());
}

#[tokio::test]
async fn test_status_change_uses_query() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/user"))
        .and(query_param("id", "17"))
        .and(query_param("status", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    authenticated(&server)
        .set_company_status("17", CompanyStatus::Inactive)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_credentials_update_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/user/user-credentials"))
        .and(body_json(json!({
            "id": "17",
            "email": "new@acme.fr",
            "password": "new-secret"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let update = CredentialsUpdate {
        id: "17".into(),
        email: "new@acme.fr".into(),
        password: "new-secret".into(),
    };
    authenticated(&server).update_credentials(&update).await.unwrap();
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/user/17"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    authenticated(&server).delete_company("17").await.unwrap();
}

#[tokio::test]
async fn test_transport_failure_message() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = PublicApiClient::new(uri).unwrap();
    let err = client.login("admin@salesclose.fr", "secret").await.unwrap_err();

    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(err.user_message(), "No response from server.");
}
