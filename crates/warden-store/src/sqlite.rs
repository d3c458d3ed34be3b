//! SQLite implementation of the cache store.
//!
//! This is the persistent backend for the permission cache. It uses rusqlite
//! with bundled SQLite, wrapped in async via tokio::spawn_blocking.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use warden_core::PermissionString;

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::CacheStore;

/// SQLite-based cache store.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime. Expiry is enforced on read: a row
/// whose deadline has passed is observed as a miss and left for
/// [`SqliteCacheStore::purge_expired`] or the next `put` to reclaim.
pub struct SqliteCacheStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCacheStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Delete every expired row.
    ///
    /// Expiry is otherwise lazy; deployments with many short-lived actors
    /// can run this periodically to keep the table bounded. Returns the
    /// number of rows reclaimed.
    pub async fn purge_expired(&self) -> Result<usize> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;
            let purged = conn.execute(
                "DELETE FROM cache_entries WHERE expires_at <= ?1",
                params![now_millis()],
            )?;
            Ok(purged)
        })
        .await
        .map_err(join_error)?
    }
}

/// Lock the connection, mapping a poisoned mutex onto a database error.
fn lock_conn(conn: &Arc<Mutex<Connection>>) -> Result<std::sync::MutexGuard<'_, Connection>> {
    conn.lock().map_err(|e| {
        StoreError::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
            Some(format!("mutex poisoned: {}", e)),
        ))
    })
}

/// Map a spawn_blocking join failure onto a database error.
fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

/// Encode a permission set to CBOR bytes.
fn encode_perms(perms: &HashSet<PermissionString>) -> Result<Vec<u8>> {
    // CBOR wants a sequence; ordering inside the set is irrelevant.
    let perms: Vec<&PermissionString> = perms.iter().collect();
    let mut buf = Vec::new();
    ciborium::into_writer(&perms, &mut buf)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(buf)
}

/// Decode a permission set from CBOR bytes.
fn decode_perms(bytes: &[u8]) -> Result<HashSet<PermissionString>> {
    let perms: Vec<PermissionString> =
        ciborium::from_reader(bytes).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(perms.into_iter().collect())
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn get(&self, key: &str) -> Result<Option<HashSet<PermissionString>>> {
        let key = key.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let row: Option<(Vec<u8>, i64)> = conn
                .query_row(
                    "SELECT perms, expires_at FROM cache_entries WHERE cache_key = ?1",
                    params![key],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            match row {
                Some((bytes, expires_at)) if now_millis() < expires_at => {
                    Ok(Some(decode_perms(&bytes)?))
                }
                _ => Ok(None),
            }
        })
        .await
        .map_err(join_error)?
    }

    async fn put(&self, key: &str, perms: &HashSet<PermissionString>, ttl: Duration) -> Result<()> {
        let key = key.to_string();
        let bytes = encode_perms(perms)?;
        let ttl_ms = ttl.as_millis() as i64;
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;

            let now = now_millis();
            conn.execute(
                "INSERT INTO cache_entries (cache_key, perms, stored_at, expires_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(cache_key) DO UPDATE SET
                    perms = excluded.perms,
                    stored_at = excluded.stored_at,
                    expires_at = excluded.expires_at",
                params![key, bytes, now, now + ttl_ms],
            )?;

            Ok(())
        })
        .await
        .map_err(join_error)?
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = lock_conn(&conn)?;
            conn.execute("DELETE FROM cache_entries WHERE cache_key = ?1", params![key])?;
            Ok(())
        })
        .await
        .map_err(join_error)?
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
