//! Effective machine config labels.
//!
//! A profile may name the label for its generated machine configuration and
//! the selector for the receiving pool explicitly. When it does not, both
//! default to [`MACHINE_CONFIG_ROLE_LABEL_KEY`] with the role taken from the
//! node selector.

use performance_profile_types::{Labels, PerformanceProfile, MACHINE_CONFIG_ROLE_LABEL_KEY};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::selector::{first_key_and_value, node_selector_role};

/// Label attached to the machine configuration generated for `profile`.
pub fn machine_config_label(profile: &PerformanceProfile) -> ValidationResult<(String, String)> {
    resolve(
        profile,
        profile.spec.machine_config_label.as_ref(),
        "machine config label",
    )
}

/// Selector for the machine config pool that receives the configuration.
pub fn machine_config_pool_selector(
    profile: &PerformanceProfile,
) -> ValidationResult<(String, String)> {
    resolve(
        profile,
        profile.spec.machine_config_pool_selector.as_ref(),
        "machine config pool selector",
    )
}

fn resolve(
    profile: &PerformanceProfile,
    configured: Option<&Labels>,
    what: &'static str,
) -> ValidationResult<(String, String)> {
    if let Some((key, value)) = configured.and_then(first_key_and_value) {
        return Ok((key.to_string(), value.to_string()));
    }

    let node_selector = profile.spec.node_selector.as_ref();
    let role = node_selector
        .and_then(node_selector_role)
        .ok_or_else(|| ValidationError::InvalidNodeSelector {
            keys: node_selector
                .map(|selector| selector.keys().cloned().collect())
                .unwrap_or_default(),
        })?;

    debug!(
        profile = profile.name(),
        role,
        "Defaulting {} from node selector role",
        what
    );
    Ok((MACHINE_CONFIG_ROLE_LABEL_KEY.to_string(), role.to_string()))
}
