use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Stores `code` for `email`, replacing any live code.
    async fn put(&self, email: &str, code: u32, ttl: Duration);

    async fn get(&self, email: &str) -> Option<u32>;

    /// Removes the entry if it is live and equals `code`.
    async fn consume(&self, email: &str, code: u32) -> bool;

    /// Drops expired entries, returning how many were removed.
    async fn purge_expired(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct CodeEntry {
    code: u32,
    expires_at: DateTime<Utc>,
}

impl CodeEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Clone, Default)]
pub struct MemoryCodeStore {
    entries: Arc<RwLock<HashMap<String, CodeEntry>>>,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn put(&self, email: &str, code: u32, ttl: Duration) {
        let entry = CodeEntry {
            code,
            expires_at: Utc::now() + ttl,
        };
        self.entries.write().await.insert(email.to_string(), entry);
    }

    async fn get(&self, email: &str) -> Option<u32> {
        let entries = self.entries.read().await;
        entries
            .get(email)
            .filter(|entry| entry.is_live(Utc::now()))
            .map(|entry| entry.code)
    }

    async fn consume(&self, email: &str, code: u32) -> bool {
        let mut entries = self.entries.write().await;
        let matches = entries
            .get(email)
            .map_or(false, |entry| entry.is_live(Utc::now()) && entry.code == code);

        if matches {
            entries.remove(email);
        }
        matches
    }

    async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        let now = Utc::now();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }
}
