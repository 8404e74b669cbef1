//! Loading profiles from YAML or JSON documents.

use crate::profile::PerformanceProfile;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a profile document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document could not be read.
    #[error("failed to read profile document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML for a profile.
    #[error("invalid YAML profile document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON for a profile.
    #[error("invalid JSON profile document: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a known format.
    #[error("unsupported profile document format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for document loading.
pub type DocumentResult<T> = Result<T, DocumentError>;

impl PerformanceProfile {
    /// Parse a profile from a YAML document.
    pub fn from_yaml_str(contents: &str) -> DocumentResult<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Parse a profile from a JSON document.
    pub fn from_json_str(contents: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read a profile from disk. `.yaml`/`.yml` are parsed as YAML and
    /// `.json` as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let contents = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let profile = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents)?,
            "json" => Self::from_json_str(&contents)?,
            other => return Err(DocumentError::UnsupportedFormat(other.to_string())),
        };

        debug!(
            path = %path.display(),
            profile = profile.name(),
            "Loaded performance profile document"
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuSet, HugePageSize};

    const PROFILE_YAML: &str = r#"
apiVersion: performance.openshift.io/v2
kind: PerformanceProfile
metadata:
  name: manual
  annotations:
    performance.openshift.io/pause-reconcile: "true"
spec:
  cpu:
    isolated: "2-7"
    reserved: "0-1"
  hugepages:
    defaultHugepagesSize: 1G
    pages:
      - size: 1G
        count: 4
        node: 0
      - size: 2M
        count: 128
  nodeSelector:
    node-role.kubernetes.io/worker-cnf: ""
"#;

    #[test]
    fn parses_yaml_document() {
        let profile = PerformanceProfile::from_yaml_str(PROFILE_YAML).unwrap();
        assert_eq!(profile.name(), "manual");
        assert!(profile.is_paused());

        let cpu = profile.spec.cpu.as_ref().unwrap();
        assert_eq!(cpu.isolated, Some(CpuSet::new("2-7")));
        assert_eq!(cpu.reserved, Some(CpuSet::new("0-1")));

        let hugepages = profile.spec.hugepages.as_ref().unwrap();
        assert_eq!(
            hugepages.default_hugepages_size,
            Some(HugePageSize::one_gigabyte())
        );
        assert_eq!(hugepages.pages.len(), 2);
        assert_eq!(hugepages.pages[0].node, Some(0));
        assert_eq!(hugepages.pages[1].node, None);

        assert!(profile.spec.machine_config_label.is_none());
        assert_eq!(profile.spec.node_selector.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn parses_json_document() {
        let profile = PerformanceProfile::from_json_str(
            r#"{"metadata":{"name":"j"},"spec":{"cpu":{"reserved":"0"}}}"#,
        )
        .unwrap();
        assert_eq!(profile.name(), "j");
        assert!(profile.spec.cpu.unwrap().isolated.is_none());
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = PerformanceProfile::from_yaml_str("spec: [").unwrap_err();
        assert!(matches!(err, DocumentError::Yaml(_)));
    }

    #[test]
    fn reads_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("profile.yaml");
        std::fs::write(&yaml_path, PROFILE_YAML).unwrap();
        assert_eq!(
            PerformanceProfile::from_path(&yaml_path).unwrap().name(),
            "manual"
        );

        let toml_path = dir.path().join("profile.toml");
        std::fs::write(&toml_path, "").unwrap();
        let err = PerformanceProfile::from_path(&toml_path).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(ext) if ext == "toml"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PerformanceProfile::from_path("/nonexistent/profile.yaml").unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.yaml"));
    }
}
