/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The middleware reads the
 * bearer token from the `Authorization` header, verifies it and stores the
 * caller's identity in the request extensions. It never touches a store.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the token claims
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

/// Pull the token out of `Authorization: Bearer <token>`
///
/// `Ok(None)` means the header is absent.
fn bearer_token(headers: &axum::http::HeaderMap) -> Result<Option<&str>, BackendError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid or expired token")
        })?;

    Ok(Some(token))
}

/// Authentication middleware
///
/// 1. Extracts the token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches an [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenIssuer>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::unauthorized("No token provided")
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
        email: claims.user_email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind [`auth_middleware`]; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("No token provided")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, StatusCode};

    #[test]
    fn test_bearer_token_absent() {
        let headers = HeaderMap::new();
        assert!(matches!(bearer_token(&headers), Ok(None)));
    }

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));
        let err = bearer_token(&headers).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_err());
    }

    #[tokio::test]
    async fn test_extractor_requires_extension() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();
        let missing = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(missing.is_err());

        let user = AuthenticatedUser {
            user_id: "user-1".to_string(),
            email: "a@x.com".to_string(),
        };
        parts.extensions.insert(user.clone());
        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, user);
    }
}
