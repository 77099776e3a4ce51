//! Backend Module
//!
//! All server-side code: the Axum HTTP server, authentication, score
//! tracking and the stores behind them. Only compiled with the `ssr` feature.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state and app creation
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, password hashing, tokens, register/login
//! ├── scores/         - Score records and score handlers
//! ├── store/          - PostgreSQL and in-memory store implementations
//! ├── middleware/     - Bearer token gate
//! └── error/          - Error taxonomy and HTTP conversion
//! ```
//!
//! # State Management
//!
//! Handlers share one `AppState` clone. It holds the two stores behind
//! `Arc<dyn ...>`, the token issuer and the password hasher. The database
//! pool, when configured, is created once at startup and closed after the
//! server stops.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, BackendError>`. Store and crypto failures
//! are logged in full and reported to the client as a fixed 500 message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Score records and handlers
pub mod scores;

/// Store implementations
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
