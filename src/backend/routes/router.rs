/**
 * Router Configuration
 *
 * Combines the API routes with the fallback handler and the HTTP layers
 * (request tracing and CORS) into a single Axum router.
 *
 * # Layer Order
 *
 * Layers wrap the fallback too, so 404 responses are traced and carry
 * CORS headers like any other response.
 */

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, Request,
    },
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info_span, Span};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

const CORS_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, token issuer and password hasher
/// * `cors_origin` - Allowed browser origin. With an origin, credentials
///   are allowed for that origin only; without one, any origin may call
///   the API without credentials.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Route not found") });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors_layer(cors_origin)),
        )
        .with_state(app_state)
}

fn cors_layer(cors_origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(CORS_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    match cors_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => base
            .allow_origin(AllowOrigin::exact(origin))
            .allow_credentials(true),
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS_ORIGIN: {}", e);
            base
        }
        None => base.allow_origin(Any),
    }
}

fn make_span(request: &Request<Body>) -> Span {
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
    )
}
