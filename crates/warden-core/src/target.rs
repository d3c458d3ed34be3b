//! Resource descriptor parsing.
//!
//! A descriptor is a single dotted string "namespace.kind" naming what a
//! route protects. The split happens at the first dot only, so the kind may
//! itself contain dots.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, Result};

/// A parsed resource descriptor: (namespace, kind).
///
/// Both parts are non-empty. Malformed descriptors are rejected at parse
/// time; they never reach derivation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceTarget {
    namespace: String,
    kind: String,
}

impl ResourceTarget {
    /// Parse a "namespace.kind" descriptor.
    ///
    /// The split is on the FIRST dot: `"shop.order.line"` parses as
    /// namespace `"shop"`, kind `"order.line"`. A missing dot or an empty
    /// part signals [`CoreError::InvalidDescriptor`].
    pub fn parse(raw: &str) -> Result<Self> {
        let (namespace, kind) = raw
            .split_once('.')
            .ok_or_else(|| CoreError::InvalidDescriptor(raw.to_string()))?;

        if namespace.is_empty() || kind.is_empty() {
            return Err(CoreError::InvalidDescriptor(raw.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            kind: kind.to_string(),
        })
    }

    /// The namespace (left of the first dot).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The resource kind (everything right of the first dot).
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.kind)
    }
}
