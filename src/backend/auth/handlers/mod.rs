//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── probe.rs    - Public and token-gated probe endpoints
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//! - **`free_endpoint`** - GET /free-endpoint - Always reachable
//! - **`auth_endpoint`** - GET /auth-endpoint - Requires a valid token
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use scoreboard::backend::{auth::handlers::{login, register}, AppState};
//!
//! fn auth_routes() -> Router<AppState> {
//!     Router::new()
//!         .route("/register", post(register))
//!         .route("/login", post(login))
//! }
//! ```

/// Register handler
pub mod register;

/// Login handler
pub mod login;

pub mod probe;

pub use login::login;
pub use probe::{auth_endpoint, free_endpoint, hello};
pub use register::register;
