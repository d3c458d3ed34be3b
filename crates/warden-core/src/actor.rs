//! Capability traits at the caller seam.
//!
//! The engine never inspects caller types directly; callers adapt their user
//! and record types to these traits.

use crate::types::ActorId;

/// A requesting actor, as seen by the decision engine.
///
/// Identity is stable for the duration of a decision. The actor's full
/// permission set is NOT exposed here; it is fetched through the permission
/// source, keyed by [`Actor::id`].
pub trait Actor {
    /// The actor's stable identifier.
    fn id(&self) -> ActorId;

    /// Whether the actor carries the unconditional elevation flag.
    fn is_superuser(&self) -> bool {
        false
    }

    /// The actor's role classifier, if it has one.
    ///
    /// A missing classifier is treated as non-membership of every elevated
    /// role, never as an error.
    fn role(&self) -> Option<&str> {
        None
    }
}

/// A resource record that can be ownership-checked.
///
/// Object-level decisions compare the record's owning actor to the
/// requesting actor.
pub trait Ownable {
    /// The id of the actor that owns this record, if the record carries
    /// owner attribution.
    fn owner_id(&self) -> Option<ActorId>;

    /// Fallback identifier compared against the requesting actor's id when
    /// the record carries no owner attribution.
    ///
    /// Retained for compatibility with callers whose records are keyed by
    /// their owning actor's id (a profile row, say). Most record types
    /// should leave this as `None`; a record id that is not an actor id
    /// must never be returned here.
    fn record_id(&self) -> Option<ActorId> {
        None
    }
}
