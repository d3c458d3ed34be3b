//! The permission cache: keyed, TTL-bound, read-through.
//!
//! One entry per actor, holding the actor's full permission set. Entries are
//! filled on miss from the permission source and trusted until their TTL
//! elapses.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use warden_core::{ActorId, PermissionString};
use warden_store::{CacheStore, PermissionSource, Result};

/// Read-through cache over a [`CacheStore`] and a [`PermissionSource`].
///
/// Concurrent misses for one actor may each hit the source; the last writer
/// wins.
pub struct PermissionCache<C, S> {
    store: Arc<C>,
    source: Arc<S>,
    key_prefix: String,
    ttl: Duration,
}

impl<C: CacheStore, S: PermissionSource> PermissionCache<C, S> {
    /// Create a cache over the given store and source.
    pub fn new(store: Arc<C>, source: Arc<S>, key_prefix: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            source,
            key_prefix: key_prefix.into(),
            ttl,
        }
    }

    /// The cache key for an actor: `"<prefix>:<actor_id>"`.
    pub fn cache_key(&self, actor_id: &ActorId) -> String {
        format!("{}:{}", self.key_prefix, actor_id)
    }

    /// Get the actor's permission set, filling the cache on miss.
    ///
    /// A hit returns the stored set without touching the source. On miss or
    /// expiry the source is queried, the result stored wholesale under the
    /// configured TTL, and returned. Source failures propagate uncached.
    pub async fn permissions_for(&self, actor_id: &ActorId) -> Result<HashSet<PermissionString>> {
        let key = self.cache_key(actor_id);

        if let Some(perms) = self.store.get(&key).await? {
            return Ok(perms);
        }

        let perms = self.source.fetch_all_permissions(actor_id).await?;
        self.store.put(&key, &perms, self.ttl).await?;

        Ok(perms)
    }

    /// Drop the actor's cached entry so the next read refetches.
    pub async fn invalidate(&self, actor_id: &ActorId) -> Result<()> {
        self.store.remove(&self.cache_key(actor_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use warden_store::{MemoryCacheStore, MemorySource, StoreError};

    /// Wraps a MemorySource and counts upstream fetches.
    struct CountingSource {
        inner: MemorySource,
        fetches: AtomicUsize,
    }

    impl CountingSource {
        fn new(inner: MemorySource) -> Self {
            Self {
                inner,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PermissionSource for CountingSource {
        async fn fetch_all_permissions(
            &self,
            actor_id: &ActorId,
        ) -> Result<HashSet<PermissionString>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_all_permissions(actor_id).await
        }
    }

    /// A source that always fails.
    struct BrokenSource;

    #[async_trait]
    impl PermissionSource for BrokenSource {
        async fn fetch_all_permissions(&self, _: &ActorId) -> Result<HashSet<PermissionString>> {
            Err(StoreError::Source("directory unreachable".to_string()))
        }
    }

    fn counting_cache(
        perms: &[&str],
    ) -> (PermissionCache<MemoryCacheStore, CountingSource>, Arc<CountingSource>) {
        let inner = MemorySource::new();
        inner.assign("1", perms.iter().copied());
        let source = Arc::new(CountingSource::new(inner));
        let cache = PermissionCache::new(
            Arc::new(MemoryCacheStore::new()),
            Arc::clone(&source),
            "user_perms",
            Duration::from_secs(300),
        );
        (cache, source)
    }

    #[tokio::test]
    async fn test_cache_key_format() {
        let (cache, _) = counting_cache(&[]);
        assert_eq!(cache.cache_key(&ActorId::from(123u64)), "user_perms:123");
    }

    #[tokio::test]
    async fn test_miss_fills_then_hit_skips_source() {
        let (cache, source) = counting_cache(&["shop.view_order"]);
        let actor = ActorId::from("1");

        let first = cache.permissions_for(&actor).await.unwrap();
        assert!(first.contains(&PermissionString::from("shop.view_order")));
        assert_eq!(source.fetch_count(), 1);

        let second = cache.permissions_for(&actor).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_expiry_refetches() {
        let inner = MemorySource::new();
        inner.assign("1", ["shop.view_order"]);
        let source = Arc::new(CountingSource::new(inner));
        let cache = PermissionCache::new(
            Arc::new(MemoryCacheStore::new()),
            Arc::clone(&source),
            "user_perms",
            Duration::from_millis(10),
        );
        let actor = ActorId::from("1");

        cache.permissions_for(&actor).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.permissions_for(&actor).await.unwrap();

        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let (cache, source) = counting_cache(&["shop.view_order"]);
        let actor = ActorId::from("1");

        cache.permissions_for(&actor).await.unwrap();
        cache.invalidate(&actor).await.unwrap();
        cache.permissions_for(&actor).await.unwrap();

        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_source_failure_propagates_uncached() {
        let cache = PermissionCache::new(
            Arc::new(MemoryCacheStore::new()),
            Arc::new(BrokenSource),
            "user_perms",
            Duration::from_secs(300),
        );
        let actor = ActorId::from("1");

        assert!(cache.permissions_for(&actor).await.is_err());
        // Nothing was negatively cached; the next call fails again rather
        // than returning an empty hit.
        assert!(cache.permissions_for(&actor).await.is_err());
    }
}
