//! API request and response bodies
//!
//! Field names follow the JSON the HTTP API exposes (`insertedId`,
//! `highScore`), so the Rust names are mapped with `serde(rename)`.

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::shared::error::SharedError;

/// Longest password bcrypt hashes in full
///
/// bcrypt reads 72 bytes of input including a terminating NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Register and login request
///
/// Both endpoints take the same body.
#[derive(Deserialize, Serialize, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, never echoed)
    pub password: String,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialsRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Basic shape checks before any hashing or store access
    ///
    /// The email is trimmed; the password is taken verbatim.
    pub fn validate(&self) -> Result<(), SharedError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SharedError::validation("email", "Email is required"));
        }
        if !email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password is required"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation("password", "Password is too long"));
        }
        Ok(())
    }
}

/// Identifier of the freshly inserted user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterResult {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// 201 body of `POST /register`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub message: String,
    pub result: RegisterResult,
}

/// User part of a successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginUser {
    pub email: String,
    /// Bearer token for the gated endpoints
    pub token: String,
}

/// 200 body of `POST /login`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub message: String,
    pub user: LoginUser,
}

/// Body carrying only a message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `POST /saveScore` request
///
/// `score` is optional at the serde level so a missing field reaches
/// validation instead of failing deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SaveScoreRequest {
    #[serde(default)]
    pub score: Option<f64>,
}

impl SaveScoreRequest {
    /// Returns the score if it is present and a finite number
    pub fn validate(&self) -> Result<f64, SharedError> {
        match self.score {
            Some(score) if score.is_finite() => Ok(score),
            _ => Err(SharedError::validation("score", "Invalid score value")),
        }
    }
}

/// 200 body of `GET /getScores`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoresResponse {
    #[serde(serialize_with = "serialize_scores")]
    pub scores: Vec<f64>,
}

/// 200 body of `GET /getHighScore`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HighScoreResponse {
    #[serde(rename = "highScore", serialize_with = "serialize_score")]
    pub high_score: f64,
}

/// Integers above this are not exactly representable as f64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole-number scores as JSON integers (`30`, not `30.0`)
fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.fract() == 0.0 && score.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}

fn serialize_scores<S: Serializer>(scores: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    struct Score(f64);

    impl Serialize for Score {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize_score(&self.0, serializer)
        }
    }

    let mut seq = serializer.serialize_seq(Some(scores.len()))?;
    for score in scores {
        seq.serialize_element(&Score(*score))?;
    }
    seq.end()
}
