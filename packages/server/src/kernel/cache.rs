use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Cache key: the question text plus the serialized source context.
pub type SuggestionKey = (String, String);

#[derive(Clone, Debug)]
struct CacheEntry {
    questions: Vec<String>,
    expires_at: DateTime<Utc>,
}

/// In-memory memoization of generated follow-up questions.
///
/// Entries expire after the configured TTL (1 hour by default). Get and
/// insert are atomic per key, but there is no single-flight coordination:
/// concurrent misses for the same key may each reach the model, and the
/// last writer wins.
pub struct SuggestionCache {
    entries: RwLock<HashMap<SuggestionKey, CacheEntry>>,
    ttl: Duration,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(1))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached questions for a key, if present and not expired.
    pub async fn get(&self, key: &SuggestionKey) -> Option<Vec<String>> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        if entry.expires_at <= Utc::now() {
            return None;
        }

        Some(entry.questions.clone())
    }

    /// Insert a value with the cache's TTL.
    pub async fn insert(&self, key: SuggestionKey, questions: Vec<String>) {
        self.insert_with_expiry(key, questions, Utc::now() + self.ttl)
            .await;
    }

    /// Insert a value with an explicit expiry. Tests use this to place
    /// already-expired entries without waiting out the TTL.
    pub async fn insert_with_expiry(
        &self,
        key: SuggestionKey,
        questions: Vec<String>,
        expires_at: DateTime<Utc>,
    ) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                questions,
                expires_at,
            },
        );
    }

    /// Drop every entry. This is the whole-store invalidation handle the
    /// suggestion feature is tagged with.
    pub async fn invalidate_all(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Clean up expired entries (run periodically)
    pub async fn purge_expired(&self) {
        let mut entries = self.entries.write().await;
        let now = Utc::now();
        entries.retain(|_, entry| entry.expires_at > now);
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}
