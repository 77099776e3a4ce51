//! Store Module
//!
//! Implementations of [`CredentialStore`](crate::backend::auth::users::CredentialStore)
//! and [`ScoreStore`](crate::backend::scores::records::ScoreStore).
//!
//! - **`postgres`** - `PgStore`, the production store
//! - **`memory`** - `MemoryStore`, used by tests and when no database is configured
//! - **`error`** - `StoreError`

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
