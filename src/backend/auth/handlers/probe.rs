//! Probe endpoints
//!
//! `GET /free-endpoint` is public; `GET /auth-endpoint` sits behind the
//! auth middleware. Clients use them to check connectivity and whether a
//! token is still accepted.

use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::MessageResponse;

pub async fn hello() -> &'static str {
    "Hello World!"
}

pub async fn free_endpoint() -> Json<MessageResponse> {
    Json(MessageResponse::new("You are free to access me anytime"))
}

pub async fn auth_endpoint(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Authorized probe from user {}", user.user_id);
    Json(MessageResponse::new("You are authorized to access me"))
}
