//! Derivation vectors for cross-checking the fixed table.
//!
//! Deployments that override the permission map, or reimplement derivation
//! in another service, can verify against these known pairs. The default
//! table must always reproduce every vector exactly.

use serde::{Deserialize, Serialize};

use warden_core::{PermissionMap, PermissionString};

/// A single derivation vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivationVector {
    pub name: &'static str,
    pub description: &'static str,

    // Inputs
    pub method: &'static str,
    pub descriptor: &'static str,

    // Expected output
    pub expected: &'static str,
}

/// All derivation vectors for the default table.
pub fn all_vectors() -> Vec<DerivationVector> {
    vec![
        DerivationVector {
            name: "read",
            description: "GET maps to the view verb",
            method: "GET",
            descriptor: "shop.order",
            expected: "shop.view_order",
        },
        DerivationVector {
            name: "create",
            description: "POST maps to the add verb",
            method: "POST",
            descriptor: "shop.order",
            expected: "shop.add_order",
        },
        DerivationVector {
            name: "update_full",
            description: "PUT maps to the change verb",
            method: "PUT",
            descriptor: "shop.order",
            expected: "shop.change_order",
        },
        DerivationVector {
            name: "update_partial",
            description: "PATCH maps to the change verb, same as PUT",
            method: "PATCH",
            descriptor: "shop.order",
            expected: "shop.change_order",
        },
        DerivationVector {
            name: "delete",
            description: "DELETE maps to the delete verb",
            method: "DELETE",
            descriptor: "shop.order",
            expected: "shop.delete_order",
        },
        DerivationVector {
            name: "dotted_kind",
            description: "Split happens at the first dot only",
            method: "GET",
            descriptor: "shop.order.line",
            expected: "shop.view_order.line",
        },
        DerivationVector {
            name: "underscore_kind",
            description: "Underscores in the kind pass through verbatim",
            method: "DELETE",
            descriptor: "billing.credit_note",
            expected: "billing.delete_credit_note",
        },
        DerivationVector {
            name: "single_char_parts",
            description: "Minimal namespace and kind",
            method: "POST",
            descriptor: "a.b",
            expected: "a.add_b",
        },
    ]
}

/// Run one vector through the default table.
pub fn derive_vector(vector: &DerivationVector) -> PermissionString {
    PermissionMap::default()
        .derive_raw(vector.method, vector.descriptor)
        .expect("derivation vectors must derive cleanly")
}

/// Verify every vector against the default table.
///
/// Returns the first mismatch as an error message.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let derived = derive_vector(&vector);
        if derived.as_str() != vector.expected {
            return Err(format!(
                "vector {}: expected {}, derived {}",
                vector.name, vector.expected, derived
            ));
        }
    }
    Ok(())
}
