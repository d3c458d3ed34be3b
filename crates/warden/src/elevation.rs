//! Elevated-actor resolution.
//!
//! Elevation is the one path that bypasses permission strings entirely: a
//! superuser flag, or membership of a configured set of admin-class roles.

use std::collections::HashSet;

use warden_core::Actor;

/// Decides whether an actor is exempt from permission-string checks.
#[derive(Debug, Clone, Default)]
pub struct ElevationPolicy {
    elevated_roles: HashSet<String>,
}

impl ElevationPolicy {
    /// Create a policy with the given admin-class role classifiers.
    ///
    /// An empty set means only the superuser flag elevates.
    pub fn new<I, R>(elevated_roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            elevated_roles: elevated_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the actor bypasses permission checks.
    ///
    /// True for superusers, and for actors whose role classifier is in the
    /// configured set. An actor without a role classifier is simply not a
    /// member; that is never an error.
    pub fn is_elevated<A: Actor + ?Sized>(&self, actor: &A) -> bool {
        if actor.is_superuser() {
            return true;
        }

        if self.elevated_roles.is_empty() {
            return false;
        }

        actor
            .role()
            .is_some_and(|role| self.elevated_roles.contains(role))
    }
}
