//! Validation error types.
//!
//! Messages are surfaced verbatim to whoever submitted the profile, so the
//! wording of each variant is part of the public contract.

use performance_profile_types::{HUGEPAGES_SIZE_1G, HUGEPAGES_SIZE_2M};
use std::fmt;
use thiserror::Error;

/// Reasons a performance profile is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A structurally required field is absent.
    #[error("{field} must be provided")]
    MissingField { field: &'static str },

    /// A label map holds more than one entry.
    #[error("you should provide only 1 {field} label, but {count} were given")]
    TooManyLabels { field: &'static str, count: usize },

    /// Neither label map can be defaulted from the node selector.
    #[error(
        "spec.nodeSelector must contain a label key of the form <domain>/<role> when \
         spec.machineConfigLabel or spec.machineConfigPoolSelector is not set, got keys {keys:?}"
    )]
    InvalidNodeSelector { keys: Vec<String> },

    /// A huge-page size token is not one of the accepted values.
    #[error("{target} should be equal to {one_g:?} or {two_m:?}, got {size:?}", one_g = HUGEPAGES_SIZE_1G, two_m = HUGEPAGES_SIZE_2M)]
    InvalidHugePageSize { target: SizeTarget, size: String },

    /// Two pages request the same size on the same NUMA node.
    #[error("the page with the size {size:?} and with specified NUMA node {node}, has duplication")]
    DuplicateWithNode { size: String, node: i32 },

    /// Two pages request the same size without NUMA affinity.
    #[error("the page with the size {size:?} and without the specified NUMA node, has duplication")]
    DuplicateWithoutNode { size: String },
}

/// Which size field an [`ValidationError::InvalidHugePageSize`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTarget {
    /// `spec.hugepages.defaultHugepagesSize`
    Default,
    /// An entry of `spec.hugepages.pages`
    Page,
}

impl fmt::Display for SizeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeTarget::Default => write!(f, "hugepages default size"),
            SizeTarget::Page => write!(f, "the page size"),
        }
    }
}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
