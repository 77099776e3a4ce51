/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. Stores sit behind `Arc<dyn ...>`
 * so the same handlers run against PostgreSQL in production and against
 * `MemoryStore` in tests.
 *
 * # State Extraction
 *
 * `FromRef` implementations let handlers and middleware extract only the
 * part they need, e.g. `State(tokens): State<Arc<TokenIssuer>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::CredentialStore;
use crate::backend::scores::records::ScoreStore;
use crate::backend::store::MemoryStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// User credentials, keyed by email
    pub credentials: Arc<dyn CredentialStore>,

    /// Score records, keyed by user id
    pub scores: Arc<dyn ScoreStore>,

    /// Session token issuer/verifier
    pub tokens: Arc<TokenIssuer>,

    pub hasher: PasswordHasher,

    /// Database connection pool
    ///
    /// `None` when running on the in-memory store. Kept here so the pool
    /// can be closed once the server has stopped.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        scores: Arc<dyn ScoreStore>,
        tokens: TokenIssuer,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            credentials,
            scores,
            tokens: Arc::new(tokens),
            hasher,
            db_pool: None,
        }
    }

    /// State backed by a single in-memory store
    pub fn in_memory(store: MemoryStore, tokens: TokenIssuer, hasher: PasswordHasher) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store, tokens, hasher)
    }

    pub fn with_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Release the database pool, waiting for in-flight queries
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.db_pool {
            tracing::info!("Closing database connection pool");
            pool.close().await;
        }
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ScoreStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.scores.clone()
    }
}
