/**
 * Server Configuration
 *
 * Loads `ServerConfig` from environment variables. Loading goes through a
 * lookup closure so tests can supply values without touching the process
 * environment.
 *
 * # Variables
 *
 * | Variable          | Default                 |
 * |-------------------|-------------------------|
 * | `DATABASE_URL`    | unset: in-memory store  |
 * | `SERVER_PORT`     | `PORT`, then 3000       |
 * | `JWT_SECRET`      | random per process      |
 * | `TOKEN_TTL_HOURS` | 24 (1..=8760)           |
 * | `BCRYPT_COST`     | 10                      |
 * | `CORS_ORIGIN`     | unset: any origin       |
 */

use std::time::Duration;

use thiserror::Error;

use crate::backend::auth::password::DEFAULT_COST;
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL;

const DEFAULT_PORT: u16 = 3000;

/// One year
const MAX_TOKEN_TTL_HOURS: u64 = 365 * 24;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} is out of range: {value} (expected {expected})")]
    OutOfRange {
        name: &'static str,
        value: u64,
        expected: &'static str,
    },
}

/// Everything the server reads from its environment
#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: Option<String>,
    pub port: u16,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// True when `JWT_SECRET` was unset and a random secret was generated
    pub jwt_secret_generated: bool,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub cors_origin: Option<String>,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_configured", &self.database_url.is_some())
            .field("port", &self.port)
            .field("jwt_secret_generated", &self.jwt_secret_generated)
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            jwt_secret: random_secret(),
            jwt_secret_generated: true,
            token_ttl: DEFAULT_TOKEN_TTL,
            bcrypt_cost: DEFAULT_COST,
            cors_origin: None,
        }
    }
}

fn random_secret() -> String {
    format!(
        "{}{}",
        uuid::Uuid::new_v4().simple(),
        uuid::Uuid::new_v4().simple()
    )
}

fn parse_number<F>(lookup: &F, name: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match parse_number(&lookup, "SERVER_PORT")? {
            Some(port) => Some(port),
            None => parse_number(&lookup, "PORT")?,
        };
        let port = match port {
            None => defaults.port,
            Some(port) => u16::try_from(port).map_err(|_| ConfigError::OutOfRange {
                name: "SERVER_PORT",
                value: port,
                expected: "0..=65535",
            })?,
        };

        let token_ttl = match parse_number(&lookup, "TOKEN_TTL_HOURS")? {
            None => defaults.token_ttl,
            Some(0) => {
                return Err(ConfigError::OutOfRange {
                    name: "TOKEN_TTL_HOURS",
                    value: 0,
                    expected: "1..=8760",
                })
            }
            Some(hours) if hours <= MAX_TOKEN_TTL_HOURS => Duration::from_secs(hours * 60 * 60),
            Some(hours) => {
                return Err(ConfigError::OutOfRange {
                    name: "TOKEN_TTL_HOURS",
                    value: hours,
                    expected: "1..=8760",
                })
            }
        };

        let bcrypt_cost = match parse_number(&lookup, "BCRYPT_COST")? {
            None => defaults.bcrypt_cost,
            Some(cost) if (4..=31).contains(&cost) => cost as u32,
            Some(cost) => {
                return Err(ConfigError::OutOfRange {
                    name: "BCRYPT_COST",
                    value: cost,
                    expected: "4..=31",
                })
            }
        };

        let (jwt_secret, jwt_secret_generated) = match non_empty(&lookup, "JWT_SECRET") {
            Some(secret) => (secret, false),
            None => (defaults.jwt_secret, true),
        };

        Ok(Self {
            database_url: non_empty(&lookup, "DATABASE_URL"),
            port,
            jwt_secret,
            jwt_secret_generated,
            token_ttl,
            bcrypt_cost,
            cors_origin: non_empty(&lookup, "CORS_ORIGIN"),
        })
    }
}
