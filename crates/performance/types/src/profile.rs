//! Performance profile document and spec.

use crate::hugepages::HugePages;
use crate::PAUSE_RECONCILE_ANNOTATION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Label key/value map. Ordered so that "first entry" is well defined.
pub type Labels = BTreeMap<String, String>;

/// A performance profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ProfileMetadata,

    #[serde(default)]
    pub spec: PerformanceProfileSpec,
}

impl PerformanceProfile {
    /// Create an empty profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ProfileMetadata {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Whether reconciliation of this profile has been paused by annotation.
    pub fn is_paused(&self) -> bool {
        self.metadata
            .annotations
            .get(PAUSE_RECONCILE_ANNOTATION)
            .is_some_and(|value| value == "true")
    }
}

/// Object metadata carried alongside the spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Labels,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Desired tuning for the selected nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfileSpec {
    /// CPU partitioning. Required for a profile to be accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Cpu>,

    /// Huge-page allocations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hugepages: Option<HugePages>,

    /// Label attached to the generated machine configuration (at most one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_config_label: Option<Labels>,

    /// Selector for the machine config pool that receives the configuration
    /// (at most one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_config_pool_selector: Option<Labels>,

    /// Selector for target nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<Labels>,
}

/// CPU partitioning of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    /// CPUs reserved for housekeeping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<CpuSet>,

    /// CPUs isolated for latency-sensitive workloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated: Option<CpuSet>,

    /// Allow the kernel to load-balance across isolated CPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_isolated: Option<bool>,
}

/// Linux cpu-list string, e.g. `0-3,8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CpuSet(String);

impl CpuSet {
    pub fn new(cpus: impl Into<String>) -> Self {
        Self(cpus.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CpuSet {
    fn from(cpus: &str) -> Self {
        Self::new(cpus)
    }
}
