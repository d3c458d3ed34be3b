//! Permission-string derivation.
//!
//! The map from action verbs to permission verbs is the one piece of
//! deployment-configurable vocabulary in the core. It ships with the
//! five-entry default and derives canonical "namespace.verb_kind" tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::action::ActionVerb;
use crate::error::{CoreError, Result};
use crate::target::ResourceTarget;
use crate::types::PermissionString;

/// The action-verb to permission-verb table.
///
/// Derivation is a pure function of (verb, target): no clock, no I/O, no
/// interior state. Callers may memoize results freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMap {
    verbs: HashMap<ActionVerb, String>,
}

impl Default for PermissionMap {
    /// The default table: view / add / change / change / delete.
    fn default() -> Self {
        let mut verbs = HashMap::new();
        verbs.insert(ActionVerb::Read, "view".to_string());
        verbs.insert(ActionVerb::Create, "add".to_string());
        verbs.insert(ActionVerb::UpdateFull, "change".to_string());
        verbs.insert(ActionVerb::UpdatePartial, "change".to_string());
        verbs.insert(ActionVerb::Delete, "delete".to_string());
        Self { verbs }
    }
}

impl PermissionMap {
    /// Create the default five-entry map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the permission verb for one action.
    pub fn with_verb(mut self, action: ActionVerb, verb: impl Into<String>) -> Self {
        self.verbs.insert(action, verb.into());
        self
    }

    /// Look up the permission verb for an action.
    ///
    /// An action absent from the table (possible only after an override
    /// removed it, or with a hand-built map) signals
    /// [`CoreError::UnsupportedAction`].
    pub fn verb_for(&self, action: ActionVerb) -> Result<&str> {
        self.verbs
            .get(&action)
            .map(String::as_str)
            .ok_or_else(|| CoreError::UnsupportedAction(action.method().to_string()))
    }

    /// Derive the canonical permission string for (action, target).
    pub fn derive(&self, action: ActionVerb, target: &ResourceTarget) -> Result<PermissionString> {
        let verb = self.verb_for(action)?;
        Ok(PermissionString::new(format!(
            "{}.{}_{}",
            target.namespace(),
            verb,
            target.kind()
        )))
    }

    /// Derive from raw caller inputs: a method token and a descriptor string.
    ///
    /// Convenience composition of [`ActionVerb::from_method`],
    /// [`ResourceTarget::parse`], and [`PermissionMap::derive`].
    pub fn derive_raw(&self, method: &str, descriptor: &str) -> Result<PermissionString> {
        let action = ActionVerb::from_method(method)?;
        let target = ResourceTarget::parse(descriptor)?;
        self.derive(action, &target)
    }
}
