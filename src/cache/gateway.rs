use crate::search::types::WordRecord;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const KEY_PREFIX: &str = "words";

/// Key-value store with expiring entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;
}

/// The parameters a cached result depends on, in key order.
#[derive(Serialize)]
struct KeyParts<'a> {
    quoted: bool,
    word: &'a str,
    skip: usize,
    limit: usize,
    dialects: bool,
    examples: bool,
}

/// Builds the cache key for a search.
///
/// The tuple is JSON-encoded, so the keyword is escaped and cannot bleed into
/// the neighbouring fields. A quoted and an unquoted search for the same word
/// get different keys.
pub fn cache_key(
    has_quotes: bool,
    search_word: &str,
    skip: usize,
    limit: usize,
    dialects: bool,
    examples: bool,
) -> String {
    let parts = KeyParts {
        quoted: has_quotes,
        word: search_word,
        skip,
        limit,
        dialects,
        examples,
    };
    // Serializing plain strings, integers and booleans cannot fail.
    let encoded = serde_json::to_string(&parts).unwrap_or_default();
    format!("{}:{}", KEY_PREFIX, encoded)
}

/// A cached search result: the words and the strategy that produced them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CachedWords {
    pub strategy: String,
    pub words: Vec<WordRecord>,
}

#[derive(Serialize)]
struct CachedWordsRef<'a> {
    strategy: &'a str,
    words: &'a [WordRecord],
}

/// Best-effort front for a [`CacheStore`].
///
/// Every call is bounded by `timeout`; a slow or failing store degrades to a
/// miss on read and to a dropped write on store.
#[derive(Clone)]
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    timeout: Duration,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            store,
            ttl,
            timeout,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self, key: &str) -> Option<CachedWords> {
        let raw = match tokio::time::timeout(self.timeout, self.store.get(key)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => {
                tracing::debug!("Cache miss for {}", key);
                return None;
            }
            Ok(Err(e)) => {
                tracing::warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
            Err(_) => {
                tracing::warn!("Cache read timed out after {:?} for {}", self.timeout, key);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cached) => {
                tracing::debug!("Cache hit for {}", key);
                Some(cached)
            }
            Err(e) => {
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub async fn set(&self, key: &str, strategy: &str, words: &[WordRecord]) {
        let value = match serde_json::to_string(&CachedWordsRef { strategy, words }) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to encode cache entry {}: {}", key, e);
                return;
            }
        };

        match tokio::time::timeout(self.timeout, self.store.set(key, value, self.ttl)).await {
            Ok(Ok(())) => tracing::debug!("Cached {} words under {}", words.len(), key),
            Ok(Err(e)) => tracing::warn!("Cache write failed for {}: {}", key, e),
            Err(_) => {
                tracing::warn!("Cache write timed out after {:?} for {}", self.timeout, key)
            }
        }
    }
}
