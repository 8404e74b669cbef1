//! Performance Profile Types
//!
//! Data model for declarative node tuning profiles: CPU isolation sets,
//! huge-page allocations and the labels that pin the resulting machine
//! configuration to a pool of nodes.
//!
//! The types here carry no behavior beyond parsing and a few accessors.
//! Consistency rules live in `performance-profile-validator`.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod document;
mod hugepages;
mod profile;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use document::*;
pub use hugepages::*;
pub use profile::*;

/// Label key used when a machine config label or pool selector is derived
/// from the node selector role.
pub const MACHINE_CONFIG_ROLE_LABEL_KEY: &str = "machineconfiguration.openshift.io/role";

/// Annotation that, when set to `"true"`, asks reconcilers to leave the
/// profile alone.
pub const PAUSE_RECONCILE_ANNOTATION: &str = "performance.openshift.io/pause-reconcile";
