//! In-memory store
//!
//! [`MemoryStore`] implements both [`CredentialStore`] and [`ScoreStore`]
//! with maps behind `tokio::sync::RwLock`. It backs the test suite and is
//! the fallback when no `DATABASE_URL` is configured. Data is lost when the
//! process exits.
//!
//! Cloning is cheap; all clones share the same maps.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::auth::users::{CredentialStore, User};
use crate::backend::scores::records::{ScoreRecord, ScoreStore};
use crate::backend::store::StoreError;

#[derive(Clone, Default)]
pub struct MemoryStore {
    /// Users keyed by email
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Scores keyed by user id
    scores: Arc<RwLock<HashMap<String, Vec<f64>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Ok(false);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(true)
    }
}

#[async_trait]
impl ScoreStore for MemoryStore {
    async fn append_score(&self, user_id: &str, score: f64) -> Result<(), StoreError> {
        self.scores
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(score);
        Ok(())
    }

    async fn find_scores(&self, user_id: &str) -> Result<Option<ScoreRecord>, StoreError> {
        Ok(self
            .scores
            .read()
            .await
            .get(user_id)
            .map(|scores| ScoreRecord {
                user_id: user_id.to_string(),
                scores: scores.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_if_absent_rejects_duplicate_email() {
        let store = MemoryStore::new();
        let first = User::new("a@x.com", "hash-1".to_string());
        let second = User::new("a@x.com", "hash-2".to_string());

        assert!(store.insert_if_absent(&first).await.unwrap());
        assert!(!store.insert_if_absent(&second).await.unwrap());
        assert_eq!(store.user_count().await, 1);

        let stored = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.password_hash, "hash-1");
    }

    #[tokio::test]
    async fn test_concurrent_inserts_store_one_user() {
        let store = MemoryStore::new();
        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let user = User::new("race@x.com", format!("hash-{}", i));
                store.insert_if_absent(&user).await.unwrap()
            }));
        }

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let store = MemoryStore::new();
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_creates_then_extends_record() {
        let store = MemoryStore::new();
        assert!(store.find_scores("u1").await.unwrap().is_none());

        store.append_score("u1", 10.0).await.unwrap();
        store.append_score("u1", 20.0).await.unwrap();
        store.append_score("u2", 99.0).await.unwrap();
        store.append_score("u1", 30.0).await.unwrap();

        let record = store.find_scores("u1").await.unwrap().unwrap();
        assert_eq!(record.scores, vec![10.0, 20.0, 30.0]);
        assert_eq!(record.user_id, "u1");

        let other = store.find_scores("u2").await.unwrap().unwrap();
        assert_eq!(other.scores, vec![99.0]);
    }
}
