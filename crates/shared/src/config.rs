//! Configuration types for assetdesk

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AssetDeskError;

/// Application configuration (assetdesk.yaml / assetdesk.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Default tracing filter, used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Audit trail settings
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Audit trail settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    /// Maximum entries kept in memory before the oldest are dropped
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_max_entries() -> usize {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            audit: AuditConfig::default(),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML or JSON file (by extension)
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Err(AssetDeskError::Config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> crate::Result<()> {
        if self.audit.max_entries == 0 {
            return Err(AssetDeskError::Config(
                "audit.maxEntries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.audit.max_entries, 1000);
    }

    #[test]
    fn test_config_parse_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "logFilter: debug\naudit:\n  maxEntries: 50").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.audit.max_entries, 50);
    }

    #[test]
    fn test_config_parse_json_with_partial_fields() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"audit": {{}}}}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_missing_file() {
        let err = AppConfig::from_file(Path::new("/nonexistent/assetdesk.yaml")).unwrap_err();
        assert!(matches!(err, AssetDeskError::Config(_)));
    }

    #[test]
    fn test_config_rejects_zero_audit_capacity() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "audit:\n  maxEntries: 0").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AssetDeskError::Config(_)));
    }
}
