//! Cache Module Tests
//!
//! ## Test Scopes
//! - **Keying**: Deterministic, collision-free keys over the parameter tuple.
//! - **MemoryCache**: Storage and TTL expiry.
//! - **Gateway**: Round-tripping word lists and degrading to misses on bad entries.

#[cfg(test)]
mod tests {
    use crate::cache::gateway::{CacheGateway, CacheStore, CachedWords, cache_key};
    use crate::cache::memory::MemoryCache;
    use crate::search::types::{ExampleRef, WordAttributes, WordRecord};
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::time::Duration;

    type KeyTuple = (bool, String, usize, usize, bool, bool);

    fn key_of(t: &KeyTuple) -> String {
        cache_key(t.0, &t.1, t.2, t.3, t.4, t.5)
    }

    fn word(id: &str) -> WordRecord {
        WordRecord {
            id: id.to_string(),
            word: "ụlọ".to_string(),
            word_class: "NNC".to_string(),
            definitions: vec!["house".to_string()],
            variations: vec![],
            stems: vec![],
            dialects: vec![],
            pronunciation: None,
            nsibidi: String::new(),
            attributes: WordAttributes::default(),
            examples: vec![ExampleRef::Id("ex-1".to_string())],
        }
    }

    // ============================================================
    // KEY TESTS
    // ============================================================

    #[test]
    fn test_cache_key_is_deterministic() {
        let a = cache_key(false, "akwa", 0, 10, true, false);
        let b = cache_key(false, "akwa", 0, 10, true, false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_key_embeds_quote_flag() {
        assert_ne!(
            cache_key(true, "egg", 0, 10, false, false),
            cache_key(false, "egg", 0, 10, false, false)
        );
    }

    #[test]
    fn test_cache_key_resists_delimiter_injection() {
        // A keyword containing what looks like the following fields must not
        // collide with a different tuple.
        let crafted = cache_key(false, "a\",\"skip\":1", 0, 10, false, false);
        let other = cache_key(false, "a", 1, 10, false, false);
        assert_ne!(crafted, other);
    }

    fn key_tuple() -> impl Strategy<Value = KeyTuple> {
        (
            any::<bool>(),
            ".{0,12}",
            0usize..50,
            1usize..30,
            any::<bool>(),
            any::<bool>(),
        )
    }

    proptest! {
        #[test]
        fn prop_cache_key_equal_iff_tuples_equal(a in key_tuple(), b in key_tuple()) {
            prop_assert_eq!(key_of(&a) == key_of(&b), a == b);
        }

        #[test]
        fn prop_cache_key_stable(a in key_tuple()) {
            prop_assert_eq!(key_of(&a), key_of(&a.clone()));
        }
    }

    // ============================================================
    // MEMORY CACHE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_cache_set_and_get() {
        let cache = MemoryCache::new();
        cache
            .set("k", "v".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_cache_expires_entries() {
        let cache = MemoryCache::new();
        cache
            .set("k", "v".to_string(), Duration::from_millis(20))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty(), "expired entry is dropped on read");
    }

    #[tokio::test]
    async fn test_memory_cache_overwrites_wholesale() {
        let cache = MemoryCache::new();
        let ttl = Duration::from_secs(60);
        cache.set("k", "[]".to_string(), ttl).await.unwrap();
        cache.set("k", "[1]".to_string(), ttl).await.unwrap();

        assert_eq!(cache.get("k").await.unwrap(), Some("[1]".to_string()));
        assert_eq!(cache.len(), 1);
    }

    // ============================================================
    // GATEWAY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_gateway_round_trips_words() {
        let gateway = CacheGateway::new(
            Arc::new(MemoryCache::new()),
            Duration::from_secs(60),
            Duration::from_millis(100),
        );
        let words = vec![word("w-1"), word("w-2")];

        gateway.set("key", "igbo_text_search", &words).await;

        assert_eq!(
            gateway.get("key").await,
            Some(CachedWords {
                strategy: "igbo_text_search".to_string(),
                words,
            })
        );
        assert_eq!(gateway.get("other").await, None);
    }

    #[tokio::test]
    async fn test_gateway_caches_empty_results() {
        let gateway = CacheGateway::new(
            Arc::new(MemoryCache::new()),
            Duration::from_secs(60),
            Duration::from_millis(100),
        );

        gateway.set("key", "english_regex", &[]).await;

        let cached = gateway.get("key").await.unwrap();
        assert_eq!(cached.strategy, "english_regex");
        assert!(cached.words.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_treats_garbage_as_miss() {
        let store = Arc::new(MemoryCache::new());
        store
            .set("key", "not json".to_string(), Duration::from_secs(60))
            .await
            .unwrap();
        let gateway = CacheGateway::new(store, Duration::from_secs(60), Duration::from_millis(100));

        assert_eq!(gateway.get("key").await, None);
    }

    #[tokio::test]
    async fn test_gateway_treats_untagged_word_list_as_miss() {
        let store = Arc::new(MemoryCache::new());
        store
            .set("key", "[]".to_string(), Duration::from_secs(60))
            .await
            .unwrap();
        let gateway = CacheGateway::new(store, Duration::from_secs(60), Duration::from_millis(100));

        assert_eq!(gateway.get("key").await, None);
    }
}
