//! Label-key parsing shared by the validator and the label resolver.

use performance_profile_types::Labels;

/// Split a `<domain>/<role>` label key.
///
/// Returns `None` unless the key has exactly one `/` with non-empty text on
/// both sides. A bare `role` key does not qualify.
pub fn split_label_key(key: &str) -> Option<(&str, &str)> {
    let (domain, role) = key.split_once('/')?;
    if domain.is_empty() || role.is_empty() || role.contains('/') {
        return None;
    }
    Some((domain, role))
}

/// Role taken from the first role-qualified key of a node selector.
pub fn node_selector_role(node_selector: &Labels) -> Option<&str> {
    node_selector
        .keys()
        .find_map(|key| split_label_key(key).map(|(_, role)| role))
}

/// First entry of a label map, in key order.
pub fn first_key_and_value(labels: &Labels) -> Option<(&str, &str)> {
    labels
        .iter()
        .next()
        .map(|(key, value)| (key.as_str(), value.as_str()))
}

/// `None` and an empty map both count as "not configured".
pub(crate) fn is_unset(labels: Option<&Labels>) -> bool {
    labels.map_or(true, Labels::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use performance_profile_types::testing::labels;

    #[test]
    fn splits_domain_and_role() {
        assert_eq!(
            split_label_key("node-role.kubernetes.io/worker"),
            Some(("node-role.kubernetes.io", "worker"))
        );
        assert_eq!(split_label_key("fooDomain/barRole"), Some(("fooDomain", "barRole")));
    }

    #[test]
    fn rejects_malformed_keys() {
        assert_eq!(split_label_key("worker"), None);
        assert_eq!(split_label_key("/worker"), None);
        assert_eq!(split_label_key("domain/"), None);
        assert_eq!(split_label_key("a/b/c"), None);
        assert_eq!(split_label_key(""), None);
    }

    #[test]
    fn role_from_first_qualifying_key() {
        let mut selector = labels("nodekey", "nodeValue");
        assert_eq!(node_selector_role(&selector), None);

        selector.insert("zDomain/zRole".into(), String::new());
        selector.insert("fooDomain/barRole".into(), String::new());
        assert_eq!(node_selector_role(&selector), Some("barRole"));
    }

    #[test]
    fn first_entry() {
        assert_eq!(first_key_and_value(&Labels::new()), None);
        assert_eq!(first_key_and_value(&labels("k", "v")), Some(("k", "v")));
    }

    #[test]
    fn unset_maps() {
        assert!(is_unset(None));
        assert!(is_unset(Some(&Labels::new())));
        assert!(!is_unset(Some(&labels("k", "v"))));
    }
}
