//! File-based project layout discovery for CLI use
//!
//! Handles finding and loading vbuild project files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;

pub const CONFIG_FILE: &str = "vbuild.toml";
const PACKAGE_FIELD: &str = "vbuild";

/// File-based layout discovery
///
/// # Example
///
/// ```no_run
/// use vbuild_config::ConfigDiscovery;
///
/// let layout = ConfigDiscovery::new(".").load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. vbuild.toml
    /// 2. package.json (vbuild field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load the layout from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectLayout> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        debug!(path = %path.display(), "loading project layout");
        let mut layout = self.load_from(&path)?;
        layout.root = self.root.clone();
        Ok(layout)
    }

    /// Load the layout, falling back to defaults when no file exists
    pub fn load_or_default(&self) -> Result<ProjectLayout> {
        match self.load() {
            Err(ConfigError::NotFound) => {
                debug!(root = %self.root.display(), "no project file, using default layout");
                Ok(ProjectLayout::for_root(&self.root))
            }
            other => other,
        }
    }

    fn load_from(&self, path: &Path) -> Result<ProjectLayout> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })?;

        ProjectLayout::from_value(value)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ProjectLayout> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        match parsed.get(PACKAGE_FIELD) {
            Some(value) if !value.is_null() => ProjectLayout::from_value(value.clone()),
            _ => Err(ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("Add a 'vbuild' object to your package.json".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn load_or_default_roots_defaults_at_directory() {
        let dir = TempDir::new().unwrap();
        let layout = ConfigDiscovery::new(dir.path()).load_or_default().unwrap();
        assert_eq!(layout.root, dir.path());
        assert_eq!(layout.dev_port, 3002);
    }
}
