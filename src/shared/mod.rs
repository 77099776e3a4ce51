//! Shared Module
//!
//! Types that travel over the wire between the server and its clients.
//! Nothing in here depends on the server stack, so a client crate can use
//! these bodies without enabling the `ssr` feature.

/// Request and response bodies for the HTTP API
pub mod api;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use api::{
    CredentialsRequest, HighScoreResponse, LoginResponse, LoginUser, MessageResponse,
    RegisterResponse, RegisterResult, SaveScoreRequest, ScoresResponse, MAX_PASSWORD_BYTES,
};
pub use error::SharedError;
