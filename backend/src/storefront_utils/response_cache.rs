//! In-process cache of raw storefront responses, keyed by request hash.

use std::{
    collections::HashMap,
    sync::LazyLock,
    time::{Duration, Instant},
};

use tokio::sync::RwLock;

#[derive(Debug)]
struct CachedResponse {
    body: String,
    inserted_at: Instant,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    pub async fn get(&self, request_hash: &str, ttl: Duration) -> Option<String> {
        let entries = self.entries.read().await;
        let entry = entries.get(request_hash)?;
        if entry.inserted_at.elapsed() >= ttl {
            return None;
        }
        Some(entry.body.clone())
    }

    /// Stores `body` and drops whatever has outlived `ttl`.
    pub async fn insert(&self, request_hash: String, body: String, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        entries.insert(request_hash, CachedResponse { body, inserted_at: Instant::now() });
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

pub static RESPONSE_CACHE: LazyLock<ResponseCache> = LazyLock::new(ResponseCache::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fresh_entries() {
        let cache = ResponseCache::default();
        cache.insert("abc".into(), "{\"data\":{}}".into(), Duration::from_secs(60)).await;
        assert_eq!(cache.get("abc", Duration::from_secs(60)).await.as_deref(), Some("{\"data\":{}}"));
        assert_eq!(cache.get("other", Duration::from_secs(60)).await, None);
    }

    #[tokio::test]
    async fn expired_entries_are_misses_and_get_evicted() {
        let cache = ResponseCache::default();
        cache.insert("old".into(), "1".into(), Duration::from_secs(60)).await;
        assert_eq!(cache.get("old", Duration::ZERO).await, None);

        cache.insert("new".into(), "2".into(), Duration::ZERO).await;
        assert_eq!(cache.len().await, 1);
    }
}
