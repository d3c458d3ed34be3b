//! Strong type definitions for the Warden core.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable identifier for a requesting actor.
///
/// Actor identity is immutable for the duration of a decision. The id is
/// also the cache key component for the actor's permission set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(String);

impl ActorId {
    /// Create an ActorId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A canonical permission token in "namespace.verb_kind" form.
///
/// Permission strings are derived, never hand-assembled; see
/// [`crate::derive::PermissionMap`]. Two derivations from the same inputs
/// always produce the same token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PermissionString(String);

impl PermissionString {
    /// Wrap an already-canonical permission token.
    ///
    /// Used by permission sources that persist tokens verbatim; derivation
    /// goes through [`crate::derive::PermissionMap::derive`] instead.
    pub fn new(perm: impl Into<String>) -> Self {
        Self(perm.into())
    }

    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PermissionString {
    fn from(perm: String) -> Self {
        Self(perm)
    }
}

impl From<&str> for PermissionString {
    fn from(perm: &str) -> Self {
        Self(perm.to_string())
    }
}
