//! Test fixtures and helpers.
//!
//! Common setup code for decision-protocol tests: adapter actor and record
//! types, instrumented permission sources, and a ready-made engine.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use warden::{DecisionEngine, EngineConfig};
use warden_core::{Actor, ActorId, Ownable, PermissionString};
use warden_store::{MemoryCacheStore, MemorySource, PermissionSource, Result, StoreError};

/// A concrete actor for tests.
#[derive(Debug, Clone)]
pub struct TestActor {
    pub id: u64,
    pub superuser: bool,
    pub role: Option<String>,
}

impl TestActor {
    /// An ordinary actor: no elevation flag, no role classifier.
    pub fn plain(id: u64) -> Self {
        Self {
            id,
            superuser: false,
            role: None,
        }
    }

    /// An actor with the unconditional elevation flag set.
    pub fn superuser(id: u64) -> Self {
        Self {
            id,
            superuser: true,
            role: None,
        }
    }

    /// An ordinary actor carrying a role classifier.
    pub fn with_role(id: u64, role: impl Into<String>) -> Self {
        Self {
            id,
            superuser: false,
            role: Some(role.into()),
        }
    }
}

impl Actor for TestActor {
    fn id(&self) -> ActorId {
        ActorId::from(self.id)
    }

    fn is_superuser(&self) -> bool {
        self.superuser
    }

    fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// A concrete ownable record for tests.
///
/// Covers all three ownership shapes: owner attribution, the record-id
/// fallback, and neither.
#[derive(Debug, Clone, Default)]
pub struct TestRecord {
    pub owner: Option<u64>,
    pub legacy_id: Option<u64>,
}

impl TestRecord {
    /// A record owned by the given actor.
    pub fn owned_by(owner: u64) -> Self {
        Self {
            owner: Some(owner),
            legacy_id: None,
        }
    }

    /// A record with no owner column, keyed by its owning actor's id.
    pub fn legacy(id: u64) -> Self {
        Self {
            owner: None,
            legacy_id: Some(id),
        }
    }

    /// A record exposing neither identifier.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl Ownable for TestRecord {
    fn owner_id(&self) -> Option<ActorId> {
        self.owner.map(ActorId::from)
    }

    fn record_id(&self) -> Option<ActorId> {
        self.legacy_id.map(ActorId::from)
    }
}

/// A permission source that counts upstream fetches.
///
/// Wraps a [`MemorySource`]; tests assert on [`CountingSource::fetch_count`]
/// to prove cache hits and misses.
pub struct CountingSource {
    inner: MemorySource,
    fetches: AtomicUsize,
}

impl CountingSource {
    /// Create an empty counting source.
    pub fn new() -> Self {
        Self {
            inner: MemorySource::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replace the permission set recorded for an actor.
    pub fn assign<I, P>(&self, actor_id: impl Into<ActorId>, perms: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionString>,
    {
        self.inner.assign(actor_id, perms);
    }

    /// How many times the upstream fetch ran.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for CountingSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionSource for CountingSource {
    async fn fetch_all_permissions(&self, actor_id: &ActorId) -> Result<HashSet<PermissionString>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_all_permissions(actor_id).await
    }
}

/// A permission source that always fails, for fault-containment tests.
pub struct FailingSource;

#[async_trait]
impl PermissionSource for FailingSource {
    async fn fetch_all_permissions(&self, _: &ActorId) -> Result<HashSet<PermissionString>> {
        Err(StoreError::Source("permission source down".to_string()))
    }
}

/// A test fixture: an engine over a memory cache and a counting source.
pub struct TestFixture {
    /// Shared handle to the source behind the engine.
    pub source: Arc<CountingSource>,
    /// The engine under test.
    pub engine: DecisionEngine<MemoryCacheStore, Arc<CountingSource>>,
}

impl TestFixture {
    /// Create a fixture with the default engine configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a fixture with a custom engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let source = Arc::new(CountingSource::new());
        let engine = DecisionEngine::new(MemoryCacheStore::new(), Arc::clone(&source), config);
        Self { source, engine }
    }

    /// Replace the permission set recorded for an actor.
    pub fn assign<I, P>(&self, actor_id: u64, perms: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionString>,
    {
        self.source.assign(actor_id, perms);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
