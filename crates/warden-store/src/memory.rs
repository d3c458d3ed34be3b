//! In-memory implementations of the store traits.
//!
//! The cache store here is suitable for tests and single-process
//! deployments; the permission source is primarily for tests. Both have the
//! same observable semantics as their persistent counterparts.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use warden_core::{ActorId, PermissionString};

use crate::error::Result;
use crate::traits::{CacheStore, PermissionSource};

/// In-memory cache store.
///
/// All entries are lost when the store is dropped. Thread-safe via RwLock.
/// Expired entries are observed as misses on read and overwritten on the
/// next `put`; nothing evicts them proactively.
pub struct MemoryCacheStore {
    inner: RwLock<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    perms: HashSet<PermissionString>,
    expires_at: Instant,
}

impl MemoryCacheStore {
    /// Create a new empty in-memory cache store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<HashSet<PermissionString>>> {
        let inner = self.inner.read().unwrap();

        match inner.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Ok(Some(entry.perms.clone())),
            _ => Ok(None),
        }
    }

    async fn put(&self, key: &str, perms: &HashSet<PermissionString>, ttl: Duration) -> Result<()> {
        let mut inner = self.inner.write().unwrap();

        inner.insert(
            key.to_string(),
            CacheEntry {
                perms: perms.clone(),
                expires_at: Instant::now() + ttl,
            },
        );

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.remove(key);
        Ok(())
    }
}

/// In-memory permission source.
///
/// A fixed actor-to-permissions map, primarily for tests and fixtures. The
/// engine only ever reads from it.
pub struct MemorySource {
    assignments: RwLock<HashMap<ActorId, HashSet<PermissionString>>>,
}

impl MemorySource {
    /// Create an empty source: every actor resolves to an empty set.
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the permission set recorded for an actor.
    pub fn assign<I, P>(&self, actor_id: impl Into<ActorId>, perms: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionString>,
    {
        let set = perms.into_iter().map(Into::into).collect();
        self.assignments
            .write()
            .unwrap()
            .insert(actor_id.into(), set);
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionSource for MemorySource {
    async fn fetch_all_permissions(&self, actor_id: &ActorId) -> Result<HashSet<PermissionString>> {
        let assignments = self.assignments.read().unwrap();
        Ok(assignments.get(actor_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn perm_set(perms: &[&str]) -> HashSet<PermissionString> {
        perms.iter().map(|p| PermissionString::from(*p)).collect()
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryCacheStore::new();
        let perms = perm_set(&["shop.view_order", "shop.add_order"]);

        store
            .put("user_perms:1", &perms, Duration::from_secs(300))
            .await
            .unwrap();

        let cached = store.get("user_perms:1").await.unwrap().unwrap();
        assert_eq!(cached, perms);
    }

    #[tokio::test]
    async fn test_miss_on_unknown_key() {
        let store = MemoryCacheStore::new();
        assert!(store.get("user_perms:absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_miss() {
        let store = MemoryCacheStore::new();
        let perms = perm_set(&["shop.view_order"]);

        store
            .put("user_perms:1", &perms, Duration::from_millis(10))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(store.get("user_perms:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_wholesale() {
        let store = MemoryCacheStore::new();

        store
            .put(
                "user_perms:1",
                &perm_set(&["shop.view_order", "shop.add_order"]),
                Duration::from_secs(300),
            )
            .await
            .unwrap();
        store
            .put(
                "user_perms:1",
                &perm_set(&["shop.delete_order"]),
                Duration::from_secs(300),
            )
            .await
            .unwrap();

        let cached = store.get("user_perms:1").await.unwrap().unwrap();
        assert_eq!(cached, perm_set(&["shop.delete_order"]));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryCacheStore::new();
        let perms = perm_set(&["shop.view_order"]);

        store
            .put("user_perms:1", &perms, Duration::from_secs(300))
            .await
            .unwrap();
        store.remove("user_perms:1").await.unwrap();

        assert!(store.get("user_perms:1").await.unwrap().is_none());
        // Removing again is fine.
        store.remove("user_perms:1").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_source_unknown_actor_is_empty() {
        let source = MemorySource::new();
        let perms = source
            .fetch_all_permissions(&ActorId::from("ghost"))
            .await
            .unwrap();
        assert!(perms.is_empty());
    }

    #[tokio::test]
    async fn test_memory_source_assign_replaces() {
        let source = MemorySource::new();
        source.assign("1", ["shop.view_order", "shop.add_order"]);
        source.assign("1", ["shop.view_order"]);

        let perms = source
            .fetch_all_permissions(&ActorId::from("1"))
            .await
            .unwrap();
        assert_eq!(perms, perm_set(&["shop.view_order"]));
    }

    proptest! {
        #[test]
        fn test_roundtrip_arbitrary_sets(
            key in "[a-z_]{1,16}:[0-9]{1,6}",
            perms in prop::collection::hash_set("[a-z]{1,8}\\.[a-z]{1,8}_[a-z]{1,8}", 0..16),
        ) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .unwrap();

            rt.block_on(async {
                let store = MemoryCacheStore::new();
                let set: HashSet<PermissionString> =
                    perms.iter().map(|p| PermissionString::from(p.as_str())).collect();

                store.put(&key, &set, Duration::from_secs(300)).await.unwrap();
                let cached = store.get(&key).await.unwrap().unwrap();
                assert_eq!(cached, set);
            });
        }
    }
}
