//! Score records and the score store
//!
//! One record per user, keyed by the `userId` token claim. Scores are only
//! ever appended; insertion order is preserved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend::store::StoreError;

/// Scores saved by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoreRecord {
    pub user_id: String,
    pub scores: Vec<f64>,
}

impl ScoreRecord {
    /// Highest saved score, or `None` if nothing was saved
    pub fn high_score(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Storage for score records
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Append a score, creating the record if it does not exist
    ///
    /// Implementations must do this as one atomic upsert.
    async fn append_score(&self, user_id: &str, score: f64) -> Result<(), StoreError>;

    /// Get the user's record, or `None` if they never saved a score
    async fn find_scores(&self, user_id: &str) -> Result<Option<ScoreRecord>, StoreError>;
}
