//! # Warden
//!
//! An authorization decision layer: given (actor, action, target resource),
//! decide allow/deny by combining an admin bypass with a cached set of
//! fine-grained permission strings, plus an optional object-ownership check.
//!
//! ## Overview
//!
//! - **Derivation**: a method token and a "namespace.kind" descriptor derive
//!   a canonical permission string ("shop.view_order")
//! - **Cache**: an actor's full permission set is fetched once and trusted
//!   for a TTL; misses fill the cache transparently
//! - **Elevation**: superusers and configured admin-class roles bypass the
//!   permission check entirely
//! - **Deny on error**: every internal fault resolves to `false`; the engine
//!   never raises to its caller
//!
//! ## Usage
//!
//! ```rust,no_run
//! use warden::{DecisionEngine, EngineConfig};
//! use warden::store::{MemoryCacheStore, MemorySource};
//!
//! # struct User;
//! # impl warden::core::Actor for User {
//! #     fn id(&self) -> warden::core::ActorId { warden::core::ActorId::from(1u64) }
//! # }
//! async fn example() {
//!     let cache = MemoryCacheStore::new();
//!     let source = MemorySource::new();
//!     let engine = DecisionEngine::new(cache, source, EngineConfig::default());
//!
//!     let user = User;
//!     let allowed = engine.has_permission(&user, "GET", Some("shop.order")).await;
//!     assert!(!allowed);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `warden::core` - Core primitives (ActorId, ActionVerb, derivation)
//! - `warden::store` - Cache store and permission source abstractions

pub mod cache;
pub mod elevation;
pub mod engine;
pub mod error;

// Re-export component crates
pub use warden_core as core;
pub use warden_store as store;

// Re-export main types for convenience
pub use cache::PermissionCache;
pub use elevation::ElevationPolicy;
pub use engine::{DecisionEngine, EngineConfig};
pub use error::{EngineError, Result};

// Re-export commonly used core types
pub use warden_core::{
    ActionVerb, Actor, ActorId, Ownable, PermissionMap, PermissionString, ResourceTarget,
};
