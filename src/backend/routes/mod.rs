//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router creation, fallback and HTTP layers
//! └── api_routes.rs   - Public and authenticated API routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use scoreboard::backend::{routes::create_router, server::build_state, server::ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = build_state(&config).await?;
//! let router = create_router(state, config.cors_origin.as_deref());
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
