/**
 * Session Tokens
 *
 * Stateless HS256 JWTs carrying the user's id and email. Nothing is stored
 * server-side: a token is valid if its signature checks out against the
 * configured secret and its `exp` has not passed. Rotating the secret
 * invalidates every outstanding token.
 */

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime used when none is configured
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (store identifier)
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Email
    #[serde(rename = "userEmail")]
    pub user_email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed
    #[error("failed to sign token: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),

    /// Bad signature, malformed token or expired
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// `iat + ttl` does not fit in a Unix timestamp
    #[error("token expiry overflows: issued at {issued_at}, ttl {ttl_secs}s")]
    ExpiryOverflow { issued_at: u64, ttl_secs: u64 },
}

/// Issues and verifies session tokens with one secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl TokenIssuer {
    /// Create an issuer for `secret` whose tokens live for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: no clock-skew allowance
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, issued now
    ///
    /// # Arguments
    /// * `user_id` - Store identifier of the user
    /// * `email` - User email
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, now_secs())
    }

    /// Create a token as if it had been issued at `issued_at` (Unix seconds)
    pub fn issue_at(&self, user_id: &str, email: &str, issued_at: u64) -> Result<String, TokenError> {
        let ttl_secs = self.ttl.as_secs();
        let exp = issued_at
            .checked_add(ttl_secs)
            .ok_or(TokenError::ExpiryOverflow { issued_at, ttl_secs })?;

        let claims = Claims {
            user_id: user_id.to_string(),
            user_email: email.to_string(),
            iat: issued_at,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(TokenError::Sign)
    }

    /// Verify and decode a token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(TokenError::Invalid)?;
        Ok(token_data.claims)
    }
}
