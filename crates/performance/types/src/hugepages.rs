//! Huge-page allocation requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token for 1 GiB huge pages.
pub const HUGEPAGES_SIZE_1G: &str = "1G";
/// Token for 2 MiB huge pages.
pub const HUGEPAGES_SIZE_2M: &str = "2M";

/// Every size token a profile may use.
pub const SUPPORTED_HUGEPAGE_SIZES: [&str; 2] = [HUGEPAGES_SIZE_1G, HUGEPAGES_SIZE_2M];

/// Huge-page size token as written in the profile.
///
/// Any string is accepted at parse time so that an unsupported token can be
/// reported with its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HugePageSize(String);

impl HugePageSize {
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    /// 1 GiB pages.
    pub fn one_gigabyte() -> Self {
        Self::new(HUGEPAGES_SIZE_1G)
    }

    /// 2 MiB pages.
    pub fn two_megabytes() -> Self {
        Self::new(HUGEPAGES_SIZE_2M)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is this one of [`SUPPORTED_HUGEPAGE_SIZES`]?
    pub fn is_supported(&self) -> bool {
        SUPPORTED_HUGEPAGE_SIZES.contains(&self.0.as_str())
    }
}

impl fmt::Display for HugePageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HugePageSize {
    fn from(size: &str) -> Self {
        Self::new(size)
    }
}

/// Huge-page section of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HugePages {
    /// Size used for the kernel `default_hugepagesz` argument.
    #[serde(
        rename = "defaultHugepagesSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_hugepages_size: Option<HugePageSize>,

    /// Allocation requests, in declaration order.
    #[serde(default)]
    pub pages: Vec<HugePage>,
}

/// A single huge-page allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HugePage {
    pub size: HugePageSize,

    #[serde(default)]
    pub count: u32,

    /// NUMA node to allocate on. `None` spreads the allocation across nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<i32>,
}

impl HugePage {
    pub fn new(size: impl Into<HugePageSize>, count: u32) -> Self {
        Self {
            size: size.into(),
            count,
            node: None,
        }
    }

    /// Pin the allocation to a NUMA node.
    pub fn on_node(mut self, node: i32) -> Self {
        self.node = Some(node);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_sizes() {
        assert!(HugePageSize::one_gigabyte().is_supported());
        assert!(HugePageSize::two_megabytes().is_supported());
        assert!(!HugePageSize::new("14M").is_supported());
        assert!(!HugePageSize::new("1g").is_supported());
        assert!(!HugePageSize::new("").is_supported());
    }

    #[test]
    fn page_builder_sets_node() {
        let page = HugePage::new(HUGEPAGES_SIZE_2M, 128).on_node(1);
        assert_eq!(page.size.as_str(), "2M");
        assert_eq!(page.count, 128);
        assert_eq!(page.node, Some(1));
    }

    #[test]
    fn size_serializes_as_plain_string() {
        let json = serde_json::to_string(&HugePage::new("1G", 4)).unwrap();
        assert_eq!(json, r#"{"size":"1G","count":4}"#);
    }
}
