//! Authentication test helpers
//!
//! Register and log in through the HTTP API so the tests exercise the
//! same path a client would.

use axum::http::{HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use scoreboard::shared::LoginResponse;
use uuid::Uuid;

/// Test user credentials
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub token: String,
}

pub async fn register(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/register")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await
}

pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await
}

/// Register a user and log in, returning the issued token
pub async fn create_test_user(server: &TestServer, email: &str, password: &str) -> TestUser {
    let response = register(server, email, password).await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());

    let response = login(server, email, password).await;
    assert_eq!(response.status_code(), StatusCode::OK, "{}", response.text());
    let body: LoginResponse = response.json();

    TestUser {
        email: email.to_string(),
        password: password.to_string(),
        token: body.user.token,
    }
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(server: &TestServer) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(server, &email, "test_password_123").await
}

/// `Authorization` header value for a bearer token
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("Token is not a valid header value")
}
