/**
 * PostgreSQL Store
 *
 * Implements the credential and score stores on top of a `sqlx` pool.
 *
 * # Atomicity
 *
 * - Registration relies on the unique index on `users.email`; the insert is
 *   `ON CONFLICT (email) DO NOTHING`, so two concurrent registrations with
 *   the same email store exactly one row.
 * - Saving a score is a single `INSERT ... ON CONFLICT (user_id) DO UPDATE`
 *   that appends to the array, so no read-modify-write happens in Rust.
 */

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::scores::records::{ScoreRecord, ScoreStore};
use crate::backend::store::StoreError;

/// Time allowed to obtain a connection before a query fails
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect, then run the embedded migrations
    ///
    /// # Errors
    ///
    /// Fails if the database is unreachable or a migration fails.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

#[async_trait]
impl ScoreStore for PgStore {
    async fn append_score(&self, user_id: &str, score: f64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO score_records (user_id, scores)
            VALUES ($1, ARRAY[$2::DOUBLE PRECISION])
            ON CONFLICT (user_id)
            DO UPDATE SET scores = score_records.scores || EXCLUDED.scores
            "#,
        )
        .bind(user_id)
        .bind(score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_scores(&self, user_id: &str) -> Result<Option<ScoreRecord>, StoreError> {
        let record = sqlx::query_as::<_, ScoreRecord>(
            r#"
            SELECT user_id, scores
            FROM score_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
