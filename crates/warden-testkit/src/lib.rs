//! # Warden Testkit
//!
//! Testing utilities for the Warden authorization layer.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Derivation vectors**: the fixed derivation table as executable data,
//!   for cross-checking deployments that override or reimplement it
//! - **Generators**: proptest strategies for descriptors, verbs, and
//!   permission sets
//! - **Fixtures**: adapter actor/record types and instrumented permission
//!   sources for setting up decision scenarios
//!
//! ## Derivation Vectors
//!
//! ```rust
//! use warden_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{}: {} {} -> {}", vector.name, vector.method, vector.descriptor, vector.expected);
//! }
//! verify_all_vectors().unwrap();
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use warden_core::PermissionMap;
//! use warden_testkit::generators::{descriptor, verb};
//!
//! proptest! {
//!     #[test]
//!     fn derivation_is_deterministic(d in descriptor(), v in verb()) {
//!         let map = PermissionMap::default();
//!         prop_assert_eq!(map.derive_raw(v.method(), &d).unwrap(),
//!                         map.derive_raw(v.method(), &d).unwrap());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up decision scenarios:
//!
//! ```rust,ignore
//! use warden_testkit::fixtures::{TestActor, TestFixture};
//!
//! let fixture = TestFixture::new();
//! fixture.assign(1, ["shop.view_order"]);
//! let allowed = fixture.engine.has_permission(&TestActor::plain(1), "GET", Some("shop.order")).await;
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{CountingSource, FailingSource, TestActor, TestFixture, TestRecord};
pub use generators::{descriptor, kind, namespace, permission_set, verb, DeriveParams};
pub use vectors::{all_vectors, derive_vector, verify_all_vectors, DerivationVector};
