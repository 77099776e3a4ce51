//! Authentication API integration tests
//!
//! Register, login and the token gate, driven through the full router.

#![cfg(feature = "ssr")]

mod common;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use scoreboard::backend::auth::sessions::TokenIssuer;
use scoreboard::shared::{LoginResponse, MessageResponse, RegisterResponse, MAX_PASSWORD_BYTES};

use common::*;

#[tokio::test]
async fn test_root_says_hello() {
    let server = create_test_server();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Hello World!");
}

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server();

    let response = register(&server, "a@x.com", "pw1").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: RegisterResponse = response.json();
    assert_eq!(body.message, "User Created Successfully");
    assert!(!body.result.inserted_id.is_empty());
    assert!(!response.text().contains("pw1"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server();
    register(&server, "a@x.com", "pw1").await;

    let response = register(&server, "a@x.com", "another").await;
    assert_error(&response, StatusCode::CONFLICT, "User with this email already exists");

    // The first password still works; the second attempt changed nothing
    let response = login(&server, "a@x.com", "pw1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let server = create_test_server();

    let response = register(&server, "", "pw1").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = register(&server, "a@x.com", "").await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Password is required");

    let response = server
        .post("/register")
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.post("/register").text("not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server();
    register(&server, "a@x.com", "pw1").await;

    let response = login(&server, "a@x.com", "pw1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: LoginResponse = response.json();
    assert_eq!(body.message, "Login successful");
    assert_eq!(body.user.email, "a@x.com");

    let claims = test_token_issuer().verify(&body.user.token).unwrap();
    assert_eq!(claims.user_email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server();
    register(&server, "a@x.com", "pw1").await;

    let response = login(&server, "a@x.com", "pw2").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid password");
}

#[tokio::test]
async fn test_long_passwords_are_not_truncated() {
    let server = create_test_server();
    let longest = "a".repeat(MAX_PASSWORD_BYTES);

    let response = register(&server, "a@x.com", &format!("{longest}correct")).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Password is too long");

    let response = register(&server, "a@x.com", &longest).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    // Same 71-byte prefix, different password
    let response = login(&server, "a@x.com", &format!("{longest}WRONG")).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "Password is too long");

    let response = login(&server, "a@x.com", &longest).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let server = create_test_server();

    let response = login(&server, "nobody@x.com", "pw1").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Email not found");
}

#[tokio::test]
async fn test_free_endpoint_ignores_tokens() {
    let server = create_test_server();

    let response = server.get("/free-endpoint").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MessageResponse = response.json();
    assert_eq!(body.message, "You are free to access me anytime");

    let response = server
        .get("/free-endpoint")
        .add_header(AUTHORIZATION, auth_header("garbage"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_endpoint_with_valid_token() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    let response = server
        .get("/auth-endpoint")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MessageResponse = response.json();
    assert_eq!(body.message, "You are authorized to access me");
}

#[tokio::test]
async fn test_auth_endpoint_without_token() {
    let server = create_test_server();

    let response = server.get("/auth-endpoint").await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "No token provided");
}

#[tokio::test]
async fn test_auth_endpoint_rejects_bad_tokens() {
    let server = create_test_server();
    let user = create_unique_test_user(&server).await;

    // Flip the first character of the signature
    let signature_start = user.token.rfind('.').unwrap() + 1;
    let mut tampered = user.token.clone();
    let current = &user.token[signature_start..signature_start + 1];
    let replacement = if current == "A" { "B" } else { "A" };
    tampered.replace_range(signature_start..signature_start + 1, replacement);

    let other_secret = TokenIssuer::new(b"some-other-secret", std::time::Duration::from_secs(3600))
        .issue("user-1", &user.email)
        .unwrap();

    for token in [tampered.as_str(), other_secret.as_str(), "not.a.jwt"] {
        let response = server
            .get("/auth-endpoint")
            .add_header(AUTHORIZATION, auth_header(token))
            .await;
        assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
    }

    let response = server
        .get("/auth-endpoint")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", user.token)).unwrap(),
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_endpoint_rejects_expired_token() {
    let server = create_test_server();
    let now = chrono::Utc::now().timestamp() as u64;

    let expired = test_token_issuer()
        .issue_at("user-1", "a@x.com", now - 25 * 60 * 60)
        .unwrap();

    let response = server
        .get("/auth-endpoint")
        .add_header(AUTHORIZATION, auth_header(&expired))
        .await;
    assert_error(&response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server();

    let response = server.get("/does-not-exist").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Route not found");
}
