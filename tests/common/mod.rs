//! Common test utilities and helpers
//!
//! - In-memory test server construction
//! - Authentication test helpers
//! - Error body assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;

pub use assertions::*;
pub use auth_helpers::*;

use axum_test::TestServer;
use scoreboard::backend::auth::password::PasswordHasher;
use scoreboard::backend::auth::sessions::{TokenIssuer, DEFAULT_TOKEN_TTL};
use scoreboard::backend::routes::create_router;
use scoreboard::backend::store::MemoryStore;
use scoreboard::backend::AppState;

/// Secret every test server signs its tokens with
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Minimum bcrypt cost keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_token_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, DEFAULT_TOKEN_TTL)
}

/// Fresh state on an empty in-memory store
pub fn test_state() -> AppState {
    AppState::in_memory(
        MemoryStore::new(),
        test_token_issuer(),
        PasswordHasher::new(TEST_BCRYPT_COST),
    )
}

/// Test server over the full router, CORS and tracing layers included
pub fn create_test_server() -> TestServer {
    TestServer::new(create_router(test_state(), None)).expect("Failed to build test server")
}
