//! Proptest generators for property-based testing.

use proptest::prelude::*;

use warden_core::{ActionVerb, PermissionString};

/// Generate a lowercase identifier segment.
pub fn namespace() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

/// Generate a resource kind, possibly containing dots.
pub fn kind() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,15}", 1..=3).prop_map(|segments| segments.join("."))
}

/// Generate a well-formed "namespace.kind" descriptor.
pub fn descriptor() -> impl Strategy<Value = String> {
    (namespace(), kind()).prop_map(|(ns, k)| format!("{}.{}", ns, k))
}

/// Generate an action verb.
pub fn verb() -> impl Strategy<Value = ActionVerb> {
    prop_oneof![
        Just(ActionVerb::Read),
        Just(ActionVerb::Create),
        Just(ActionVerb::UpdateFull),
        Just(ActionVerb::UpdatePartial),
        Just(ActionVerb::Delete),
    ]
}

/// Generate a permission set of up to `max` entries.
pub fn permission_set(max: usize) -> impl Strategy<Value = Vec<PermissionString>> {
    prop::collection::vec(
        (namespace(), "[a-z]{1,8}", kind())
            .prop_map(|(ns, v, k)| PermissionString::from(format!("{}.{}_{}", ns, v, k))),
        0..=max,
    )
}

/// Parameters for a derivation call.
#[derive(Debug, Clone)]
pub struct DeriveParams {
    pub verb: ActionVerb,
    pub descriptor: String,
}

impl Arbitrary for DeriveParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (verb(), descriptor())
            .prop_map(|(verb, descriptor)| DeriveParams { verb, descriptor })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::{PermissionMap, ResourceTarget};

    proptest! {
        #[test]
        fn test_derivation_deterministic(params: DeriveParams) {
            let map = PermissionMap::default();

            let a = map.derive_raw(params.verb.method(), &params.descriptor).unwrap();
            let b = map.derive_raw(params.verb.method(), &params.descriptor).unwrap();

            prop_assert_eq!(a, b);
        }

        #[test]
        fn test_derived_string_preserves_namespace_and_kind(params: DeriveParams) {
            let map = PermissionMap::default();
            let target = ResourceTarget::parse(&params.descriptor).unwrap();

            let derived = map.derive(params.verb, &target).unwrap();
            let derived = derived.as_str();

            let expected_prefix = format!("{}.", target.namespace());
            let expected_suffix = format!("_{}", target.kind());
            prop_assert!(derived.starts_with(&expected_prefix));
            prop_assert!(derived.ends_with(&expected_suffix));
        }

        #[test]
        fn test_update_verbs_collapse(d in descriptor()) {
            let map = PermissionMap::default();

            prop_assert_eq!(
                map.derive_raw("PUT", &d).unwrap(),
                map.derive_raw("PATCH", &d).unwrap()
            );
        }

        #[test]
        fn test_generated_descriptors_parse(d in descriptor()) {
            let target = ResourceTarget::parse(&d).unwrap();
            prop_assert_eq!(format!("{}.{}", target.namespace(), target.kind()), d);
        }

        #[test]
        fn test_no_dot_never_parses(raw in "[a-z0-9_]{1,24}") {
            prop_assert!(ResourceTarget::parse(&raw).is_err());
        }
    }
}
