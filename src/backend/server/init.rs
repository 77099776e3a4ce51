/**
 * Server Initialization
 *
 * Builds the application state from `ServerConfig` and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Create the token issuer from the configured secret and lifetime
 * 2. Connect to PostgreSQL and run migrations, or fall back to the
 *    in-memory store when `DATABASE_URL` is unset
 * 3. Create the router with all routes and layers
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, StoreError};

/// Build the shared state for `config`
///
/// # Errors
///
/// Fails when a database is configured but cannot be reached or migrated.
/// A missing database is not an error.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, StoreError> {
    if config.jwt_secret_generated {
        tracing::warn!(
            "JWT_SECRET not set. Using a random secret; tokens will not survive a restart."
        );
    }

    let tokens = TokenIssuer::new(config.jwt_secret.as_bytes(), config.token_ttl);
    let hasher = PasswordHasher::new(config.bcrypt_cost);

    let state = match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgStore::connect(url).await?);
            let pool = store.pool().clone();
            AppState::new(store.clone(), store, tokens, hasher).with_pool(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
            AppState::in_memory(MemoryStore::new(), tokens, hasher)
        }
    };

    Ok(state)
}

/// Create and configure the Axum application
///
/// Returns the router together with the state so the caller can release
/// the database pool after the server stops.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, AppState), StoreError> {
    tracing::info!("Initializing scoreboard backend server");

    let state = build_state(config).await?;
    let app = create_router(state.clone(), config.cors_origin.as_deref());

    tracing::info!("Router configured");
    Ok((app, state))
}
