//! # Warden Core
//!
//! Pure primitives for the Warden authorization layer: identifiers, action
//! verbs, resource descriptors, and permission-string derivation.
//!
//! This crate contains no I/O, no caching, no clock access. It is pure
//! computation over request metadata.
//!
//! ## Key Types
//!
//! - [`ActorId`] - Stable identifier for a requesting actor
//! - [`PermissionString`] - Canonical "namespace.verb_kind" capability token
//! - [`ActionVerb`] - The fixed set of recognized actions
//! - [`ResourceTarget`] - A parsed "namespace.kind" descriptor
//! - [`PermissionMap`] - The verb table that turns (action, target) into a
//!   [`PermissionString`]
//!
//! ## Derivation
//!
//! Derivation is deterministic and total over the verb table. See [`derive`]
//! module.

pub mod action;
pub mod actor;
pub mod derive;
pub mod error;
pub mod target;
pub mod types;

pub use action::ActionVerb;
pub use actor::{Actor, Ownable};
pub use derive::PermissionMap;
pub use error::{CoreError, Result};
pub use target::ResourceTarget;
pub use types::{ActorId, PermissionString};
