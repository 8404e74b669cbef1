//! Semantic validation of a performance profile.
//!
//! Rules run in a fixed order and the first broken rule is reported. Each
//! rule only reads the profile, so validation can run concurrently on
//! shared references.

use std::collections::HashSet;

use performance_profile_types::{HugePages, Labels, PerformanceProfile, PerformanceProfileSpec};
use tracing::debug;

use crate::error::{SizeTarget, ValidationError, ValidationResult};
use crate::selector::{is_unset, node_selector_role};

/// Validate a profile before it is applied.
pub fn validate_parameters(profile: &PerformanceProfile) -> ValidationResult<()> {
    debug!(profile = profile.name(), "Validating performance profile");

    let spec = &profile.spec;
    validate_cpu(spec)?;
    validate_label_cardinality(spec)?;
    validate_node_selector(spec)?;
    if let Some(hugepages) = &spec.hugepages {
        validate_hugepages(hugepages)?;
    }

    debug!(profile = profile.name(), "Performance profile is valid");
    Ok(())
}

fn validate_cpu(spec: &PerformanceProfileSpec) -> ValidationResult<()> {
    let cpu = spec
        .cpu
        .as_ref()
        .ok_or(ValidationError::MissingField { field: "spec.cpu" })?;
    if cpu.isolated.is_none() {
        return Err(ValidationError::MissingField {
            field: "spec.cpu.isolated",
        });
    }
    Ok(())
}

fn validate_label_cardinality(spec: &PerformanceProfileSpec) -> ValidationResult<()> {
    check_single_label("spec.machineConfigLabel", spec.machine_config_label.as_ref())?;
    check_single_label(
        "spec.machineConfigPoolSelector",
        spec.machine_config_pool_selector.as_ref(),
    )
}

fn check_single_label(field: &'static str, labels: Option<&Labels>) -> ValidationResult<()> {
    match labels {
        Some(labels) if labels.len() > 1 => Err(ValidationError::TooManyLabels {
            field,
            count: labels.len(),
        }),
        _ => Ok(()),
    }
}

/// Either label map may be defaulted from the node selector role, so the
/// selector must carry one whenever a map is unset.
fn validate_node_selector(spec: &PerformanceProfileSpec) -> ValidationResult<()> {
    if !is_unset(spec.machine_config_label.as_ref())
        && !is_unset(spec.machine_config_pool_selector.as_ref())
    {
        return Ok(());
    }

    match &spec.node_selector {
        Some(selector) if node_selector_role(selector).is_some() => Ok(()),
        selector => Err(ValidationError::InvalidNodeSelector {
            keys: selector
                .iter()
                .flat_map(|selector| selector.keys().cloned())
                .collect(),
        }),
    }
}

fn validate_hugepages(hugepages: &HugePages) -> ValidationResult<()> {
    if let Some(size) = &hugepages.default_hugepages_size {
        if !size.is_supported() {
            return Err(ValidationError::InvalidHugePageSize {
                target: SizeTarget::Default,
                size: size.to_string(),
            });
        }
    }

    if let Some(page) = hugepages.pages.iter().find(|page| !page.size.is_supported()) {
        return Err(ValidationError::InvalidHugePageSize {
            target: SizeTarget::Page,
            size: page.size.to_string(),
        });
    }

    // Keyed on (size, node): `None` is its own scope and never matches a
    // node-pinned entry of the same size.
    let mut seen = HashSet::with_capacity(hugepages.pages.len());
    for page in &hugepages.pages {
        if seen.insert((page.size.as_str(), page.node)) {
            continue;
        }
        let size = page.size.to_string();
        return Err(match page.node {
            Some(node) => ValidationError::DuplicateWithNode { size, node },
            None => ValidationError::DuplicateWithoutNode { size },
        });
    }

    Ok(())
}
