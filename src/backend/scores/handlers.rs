/**
 * Score Handlers
 *
 * All three handlers require an [`AuthUser`]; the record they touch is
 * always the caller's own.
 *
 * # Routes
 *
 * - `POST /saveScore` - Append a score (one atomic upsert)
 * - `GET /getScores` - All saved scores in insertion order
 * - `GET /getHighScore` - Maximum saved score
 *
 * A user with no record, or an empty one, gets 404 from both reads.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::scores::records::{ScoreRecord, ScoreStore};
use crate::shared::{
    HighScoreResponse, MessageResponse, SaveScoreRequest, ScoresResponse, SharedError,
};

const NO_SCORES: &str = "No scores found";

/// Save score handler
///
/// # Errors
///
/// * `400 Bad Request` - Score missing, not a number, or not finite
/// * `500 Internal Server Error` - Store failure
pub async fn save_score(
    AuthUser(user): AuthUser,
    State(scores): State<Arc<dyn ScoreStore>>,
    payload: Result<Json<SaveScoreRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Rejected score body: {}", rejection.body_text());
        SharedError::validation("score", "Invalid score value")
    })?;
    let score = request.validate()?;

    scores
        .append_score(&user.user_id, score)
        .await
        .map_err(|e| BackendError::internal("Error saving score", e))?;

    tracing::info!("Saved score {} for user {}", score, user.user_id);
    Ok(Json(MessageResponse::new("Score saved successfully!")))
}

/// Load the caller's record, treating an empty one like a missing one
async fn non_empty_record(
    scores: &dyn ScoreStore,
    user_id: &str,
    failure: &str,
) -> Result<ScoreRecord, BackendError> {
    scores
        .find_scores(user_id)
        .await
        .map_err(|e| BackendError::internal(failure, e))?
        .filter(|record| !record.is_empty())
        .ok_or_else(|| {
            tracing::debug!("No scores for user {}", user_id);
            BackendError::not_found(NO_SCORES)
        })
}

/// Get scores handler
///
/// # Example Response
///
/// ```json
/// { "scores": [10, 20, 30] }
/// ```
pub async fn get_scores(
    AuthUser(user): AuthUser,
    State(scores): State<Arc<dyn ScoreStore>>,
) -> Result<Json<ScoresResponse>, BackendError> {
    let record = non_empty_record(scores.as_ref(), &user.user_id, "Error fetching scores").await?;
    Ok(Json(ScoresResponse {
        scores: record.scores,
    }))
}

/// Get high score handler
///
/// # Example Response
///
/// ```json
/// { "highScore": 30 }
/// ```
pub async fn get_high_score(
    AuthUser(user): AuthUser,
    State(scores): State<Arc<dyn ScoreStore>>,
) -> Result<Json<HighScoreResponse>, BackendError> {
    let record =
        non_empty_record(scores.as_ref(), &user.user_id, "Error fetching high score").await?;
    let high_score = record
        .high_score()
        .ok_or_else(|| BackendError::not_found(NO_SCORES))?;

    Ok(Json(HighScoreResponse { high_score }))
}
