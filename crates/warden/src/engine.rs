//! The decision engine: unified API for authorization decisions.
//!
//! The engine brings together derivation, the permission cache, and the
//! elevation policy into the two decision operations. It resolves every
//! call to a boolean; internal faults are logged and denied, never raised.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, warn};

use warden_core::{Actor, ActorId, Ownable, PermissionMap, PermissionString};
use warden_store::{CacheStore, PermissionSource};

use crate::cache::PermissionCache;
use crate::elevation::ElevationPolicy;
use crate::error::{EngineError, Result};

/// Configuration for the decision engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long a cached permission set is trusted.
    pub cache_ttl: Duration,
    /// Prefix for cache keys ("<prefix>:<actor_id>").
    pub cache_key_prefix: String,
    /// Role classifiers that elevate an actor (admin bypass).
    pub elevated_roles: Vec<String>,
    /// The action-verb to permission-verb table.
    pub permission_map: PermissionMap,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            cache_key_prefix: "user_perms".to_string(),
            elevated_roles: Vec::new(),
            permission_map: PermissionMap::default(),
        }
    }
}

/// The decision engine.
///
/// Stateless and reentrant: methods take `&self` and are safe to call from
/// any number of concurrent tasks. The only shared mutable state lives in
/// the cache store, behind its own synchronization.
///
/// Every public decision method returns a plain `bool`. Deny-on-error is the
/// governing policy: a fault anywhere inside a check is logged and resolved
/// to `false`, so a careless caller can never read a failure as an allow.
pub struct DecisionEngine<C, S> {
    /// Read-through permission cache.
    cache: PermissionCache<C, S>,
    /// Admin-bypass policy.
    elevation: ElevationPolicy,
    /// Derivation table.
    map: PermissionMap,
}

impl<C: CacheStore, S: PermissionSource> DecisionEngine<C, S> {
    /// Create an engine over the given cache store and permission source.
    pub fn new(cache_store: C, source: S, config: EngineConfig) -> Self {
        Self {
            cache: PermissionCache::new(
                Arc::new(cache_store),
                Arc::new(source),
                config.cache_key_prefix,
                config.cache_ttl,
            ),
            elevation: ElevationPolicy::new(config.elevated_roles),
            map: config.permission_map,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decision Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Collection-level check: may `actor` perform `method` against the
    /// resource named by `binding`?
    ///
    /// Elevated actors are allowed unconditionally. An absent binding is a
    /// caller misconfiguration: denied and logged at warning severity,
    /// without touching the cache. Everything else that goes wrong inside
    /// the check (malformed descriptor, unknown method, cache or source
    /// failure) is denied and logged at error severity.
    pub async fn has_permission<A>(&self, actor: &A, method: &str, binding: Option<&str>) -> bool
    where
        A: Actor + ?Sized,
    {
        if self.elevation.is_elevated(actor) {
            return true;
        }

        match self.evaluate(actor, method, binding).await {
            Ok(allowed) => allowed,
            Err(err) => self.deny_on_error(actor, err),
        }
    }

    /// Object-level check: collection-level plus an ownership predicate
    /// against `record`.
    ///
    /// Elevation overrides ownership: an elevated actor is allowed without
    /// the record being consulted. For everyone else the collection-level
    /// check must pass first; only then is ownership evaluated, owner
    /// attribution taking precedence over the record-id fallback.
    pub async fn has_object_permission<A, R>(
        &self,
        actor: &A,
        method: &str,
        binding: Option<&str>,
        record: &R,
    ) -> bool
    where
        A: Actor + ?Sized,
        R: Ownable + ?Sized,
    {
        if self.elevation.is_elevated(actor) {
            return true;
        }

        match self.evaluate(actor, method, binding).await {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => return self.deny_on_error(actor, err),
        }

        let actor_id = actor.id();
        if let Some(owner) = record.owner_id() {
            return owner == actor_id;
        }
        if let Some(record_id) = record.record_id() {
            return record_id == actor_id;
        }

        false
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Introspection & Maintenance
    // ─────────────────────────────────────────────────────────────────────────

    /// The permission string a request would need, without consulting the
    /// cache. Useful for audit output and route tables.
    pub fn required_permission(&self, method: &str, descriptor: &str) -> Result<PermissionString> {
        Ok(self.map.derive_raw(method, descriptor)?)
    }

    /// Drop an actor's cached permission set so the next decision refetches.
    pub async fn invalidate(&self, actor_id: &ActorId) -> Result<()> {
        Ok(self.cache.invalidate(actor_id).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// The fallible core of both decision operations: derive the required
    /// permission and test membership in the actor's cached set.
    async fn evaluate<A>(&self, actor: &A, method: &str, binding: Option<&str>) -> Result<bool>
    where
        A: Actor + ?Sized,
    {
        let descriptor = binding.ok_or(EngineError::MissingBinding)?;
        let required = self.map.derive_raw(method, descriptor)?;
        let perms = self.cache.permissions_for(&actor.id()).await?;

        Ok(perms.contains(&required))
    }

    /// Log a caught fault at the severity its kind warrants and deny.
    fn deny_on_error<A>(&self, actor: &A, err: EngineError) -> bool
    where
        A: Actor + ?Sized,
    {
        match err {
            EngineError::MissingBinding => {
                warn!(actor = %actor.id(), "permission check denied: no resource descriptor bound");
            }
            err => {
                error!(actor = %actor.id(), error = %err, "permission check failed");
            }
        }
        false
    }
}
