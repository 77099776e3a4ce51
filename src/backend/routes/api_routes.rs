/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /` - Liveness text
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `GET /free-endpoint` - Public probe
 *
 * ## Authenticated
 * - `GET /auth-endpoint` - Token probe
 * - `POST /saveScore` - Append a score
 * - `GET /getScores` - List saved scores
 * - `GET /getHighScore` - Highest saved score
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{auth_endpoint, free_endpoint, hello, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::scores::{get_high_score, get_scores, save_score};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authenticated routes are grouped on their own router with
/// `route_layer`, so the auth middleware only runs for requests that
/// matched one of them. Unknown paths still reach the fallback as 404.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/auth-endpoint", get(auth_endpoint))
        .route("/saveScore", post(save_score))
        .route("/getScores", get(get_scores))
        .route("/getHighScore", get(get_high_score))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/", get(hello))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/free-endpoint", get(free_endpoint))
        .merge(authenticated)
}
