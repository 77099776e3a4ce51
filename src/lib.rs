//! Scoreboard - Main Library
//!
//! Scoreboard is a small HTTP backend for user registration, login and
//! per-user score tracking. Users authenticate with email and password and
//! receive a time-limited bearer token which gates the score endpoints.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared between the server and its clients
//!   - Request/response bodies
//!   - Input validation and validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and auth middleware
//!   - Password hashing (bcrypt) and JWT issuance/verification
//!   - Credential and score stores (PostgreSQL or in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (on by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use scoreboard::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, _state) = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation failures
//! - `backend::error::BackendError` for everything a handler can return;
//!   it maps onto HTTP status codes and a JSON `{message, status}` body

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
