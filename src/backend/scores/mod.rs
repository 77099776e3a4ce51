//! Scores Module
//!
//! Per-user score tracking. Every handler here sits behind the auth
//! middleware and keys the record by the caller's `userId` claim.
//!
//! - **`records`** - `ScoreRecord` and the `ScoreStore` trait
//! - **`handlers`** - `POST /saveScore`, `GET /getScores`, `GET /getHighScore`

pub mod records;

pub mod handlers;

pub use handlers::{get_high_score, get_scores, save_score};
pub use records::{ScoreRecord, ScoreStore};
