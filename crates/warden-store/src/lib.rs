//! # Warden Store
//!
//! Storage abstraction for the Warden permission cache. Provides trait-based
//! interfaces for the cache store and the upstream permission source, with
//! in-memory and SQLite implementations.
//!
//! ## Overview
//!
//! The permission cache is storage-agnostic behind the [`CacheStore`] trait.
//! [`MemoryCacheStore`] serves tests and single-process deployments;
//! [`SqliteCacheStore`] persists entries across restarts. The upstream
//! provider of an actor's full permission set is abstracted as
//! [`PermissionSource`].
//!
//! ## Key Types
//!
//! - [`CacheStore`] - Async get/put/remove of TTL-bound permission sets
//! - [`PermissionSource`] - Async actor-id to permission-set provider
//! - [`MemoryCacheStore`] - In-process cache store
//! - [`SqliteCacheStore`] - SQLite-backed cache store
//! - [`MemorySource`] - In-memory permission source for tests
//!
//! ## Design Notes
//!
//! - **Wholesale replacement**: an entry is never partially updated; `put`
//!   replaces the whole set and resets the TTL
//! - **Lazy expiry**: expired entries read as misses; nothing evicts them
//!   proactively
//! - **No negative caching**: source failures propagate and leave the cache
//!   untouched

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::{MemoryCacheStore, MemorySource};
pub use sqlite::SqliteCacheStore;
pub use traits::{CacheStore, PermissionSource};
