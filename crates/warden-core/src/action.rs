//! The fixed set of recognized action verbs.
//!
//! Verbs are mapped from transport-level method tokens. Tokens outside the
//! recognized set are a hard input error, not a deny.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// An action a caller wants to perform against a resource collection.
///
/// Full and partial update are distinct verbs at the transport layer but
/// share a permission verb in the default map (both are "change").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionVerb {
    /// Read a resource (GET).
    Read,
    /// Create a resource (POST).
    Create,
    /// Replace a resource wholesale (PUT).
    UpdateFull,
    /// Modify part of a resource (PATCH).
    UpdatePartial,
    /// Delete a resource (DELETE).
    Delete,
}

impl ActionVerb {
    /// All verbs, in method-token order.
    pub const ALL: [ActionVerb; 5] = [
        ActionVerb::Read,
        ActionVerb::Create,
        ActionVerb::UpdateFull,
        ActionVerb::UpdatePartial,
        ActionVerb::Delete,
    ];

    /// Map a transport method token to a verb.
    ///
    /// Tokens are matched exactly (uppercase). Unknown tokens signal
    /// [`CoreError::UnsupportedAction`].
    pub fn from_method(token: &str) -> Result<Self> {
        match token {
            "GET" => Ok(ActionVerb::Read),
            "POST" => Ok(ActionVerb::Create),
            "PUT" => Ok(ActionVerb::UpdateFull),
            "PATCH" => Ok(ActionVerb::UpdatePartial),
            "DELETE" => Ok(ActionVerb::Delete),
            other => Err(CoreError::UnsupportedAction(other.to_string())),
        }
    }

    /// The transport method token this verb maps from.
    pub fn method(&self) -> &'static str {
        match self {
            ActionVerb::Read => "GET",
            ActionVerb::Create => "POST",
            ActionVerb::UpdateFull => "PUT",
            ActionVerb::UpdatePartial => "PATCH",
            ActionVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ActionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.method())
    }
}
