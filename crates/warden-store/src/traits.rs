//! Store traits: the abstract interfaces behind the permission cache.
//!
//! These traits keep the decision engine storage-agnostic. Cache-store
//! implementations include SQLite (persistent) and in-memory; the permission
//! source is whatever directory or database holds the persisted permission
//! assignments.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use warden_core::{ActorId, PermissionString};

use crate::error::Result;

/// The cache store: async keyed storage of TTL-bound permission sets.
///
/// All methods are async to support both in-process and out-of-process
/// backends. For SQLite, operations run under `spawn_blocking` to avoid
/// stalling the runtime.
///
/// # Design Notes
///
/// - **Expiry is the store's job**: `get` returns `None` for an entry whose
///   TTL has elapsed. Callers cannot observe a stale set.
/// - **Wholesale replace**: `put` overwrites the full entry and resets the
///   TTL; there is no partial update.
/// - **Concurrent writers**: two writers racing on one key is permitted;
///   last writer wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a cached permission set.
    ///
    /// Returns `None` on a miss or when the stored entry has expired.
    async fn get(&self, key: &str) -> Result<Option<HashSet<PermissionString>>>;

    /// Store a permission set under `key` for `ttl`.
    async fn put(&self, key: &str, perms: &HashSet<PermissionString>, ttl: Duration) -> Result<()>;

    /// Remove a cached entry, if present.
    ///
    /// Used for invalidation; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// The upstream provider of an actor's full permission set.
///
/// This is the authoritative (uncached) read path. Implementations may fail;
/// failures propagate uncached and are never retried by this layer.
#[async_trait]
pub trait PermissionSource: Send + Sync {
    /// Fetch the actor's complete permission set.
    async fn fetch_all_permissions(&self, actor_id: &ActorId) -> Result<HashSet<PermissionString>>;
}

#[async_trait]
impl<T: CacheStore + ?Sized> CacheStore for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<HashSet<PermissionString>>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &str, perms: &HashSet<PermissionString>, ttl: Duration) -> Result<()> {
        (**self).put(key, perms, ttl).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key).await
    }
}

#[async_trait]
impl<T: PermissionSource + ?Sized> PermissionSource for std::sync::Arc<T> {
    async fn fetch_all_permissions(&self, actor_id: &ActorId) -> Result<HashSet<PermissionString>> {
        (**self).fetch_all_permissions(actor_id).await
    }
}
