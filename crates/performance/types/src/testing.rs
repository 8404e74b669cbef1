//! Fixture profiles for tests.

use crate::{
    Cpu, CpuSet, HugePage, HugePageSize, HugePages, Labels, PerformanceProfile,
    PerformanceProfileSpec, HUGEPAGES_SIZE_1G,
};

pub const MACHINE_CONFIG_LABEL_KEY: &str = "mcKey";
pub const MACHINE_CONFIG_LABEL_VALUE: &str = "mcValue";
pub const MACHINE_CONFIG_POOL_LABEL_KEY: &str = "mcpKey";
pub const MACHINE_CONFIG_POOL_LABEL_VALUE: &str = "mcpValue";
pub const NODE_SELECTOR_KEY: &str = "nodekey";
pub const NODE_SELECTOR_VALUE: &str = "nodeValue";

/// A profile that passes validation.
///
/// Its node selector is deliberately not role-qualified, so clearing either
/// label map makes it invalid until a `<domain>/<role>` selector is added.
pub fn new_performance_profile(name: &str) -> PerformanceProfile {
    PerformanceProfile {
        api_version: Some("performance.openshift.io/v2".to_string()),
        kind: Some("PerformanceProfile".to_string()),
        spec: PerformanceProfileSpec {
            cpu: Some(Cpu {
                reserved: Some(CpuSet::new("0-3")),
                isolated: Some(CpuSet::new("4-5")),
                balance_isolated: None,
            }),
            hugepages: Some(HugePages {
                default_hugepages_size: Some(HugePageSize::one_gigabyte()),
                pages: vec![HugePage::new(HUGEPAGES_SIZE_1G, 4)],
            }),
            machine_config_label: Some(labels(
                MACHINE_CONFIG_LABEL_KEY,
                MACHINE_CONFIG_LABEL_VALUE,
            )),
            machine_config_pool_selector: Some(labels(
                MACHINE_CONFIG_POOL_LABEL_KEY,
                MACHINE_CONFIG_POOL_LABEL_VALUE,
            )),
            node_selector: Some(labels(NODE_SELECTOR_KEY, NODE_SELECTOR_VALUE)),
        },
        ..PerformanceProfile::new(name)
    }
}

/// Single-entry label map.
pub fn labels(key: &str, value: &str) -> Labels {
    Labels::from([(key.to_string(), value.to_string())])
}
