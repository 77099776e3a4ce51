//! Authentication Module
//!
//! Registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and the credential store trait
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT issuing and validation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → JWT returned
//! 3. **Protected call**: `Authorization: Bearer <token>` → token verified by
//!    the auth middleware → handler sees the caller's id and email
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10 by default) before storage
//! - Tokens are HS256 JWTs and expire after 24 hours
//! - Passwords and hashes never appear in logs or `Debug` output

/// User data model and credential store
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenIssuer};
pub use users::{CredentialStore, User};
