//! On-disk project layout the resolver reads paths from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{default_output_dir, default_source_dir, default_template};
use crate::error::{ConfigError, Result};

pub const DEFAULT_DEV_PORT: u16 = 3002;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Project root; set by discovery, never read from the file
    #[serde(skip)]
    pub root: PathBuf,

    /// Bundle name → entry file, relative to the root
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, PathBuf>,

    /// First-party source directory
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// HTML document template
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_dev_host")]
    pub dev_host: String,

    #[serde(default = "default_dev_port")]
    pub dev_port: u16,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            entries: default_entries(),
            source_dir: default_source_dir(),
            template: default_template(),
            output_dir: default_output_dir(),
            dev_host: default_dev_host(),
            dev_port: DEFAULT_DEV_PORT,
        }
    }
}

impl ProjectLayout {
    /// Default layout rooted at `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use vbuild_config::ProjectLayout;
    /// use serde_json::json;
    ///
    /// let layout = ProjectLayout::from_value(json!({ "dev_port": 8080 })).unwrap();
    /// assert_eq!(layout.dev_port, 8080);
    /// assert_eq!(layout.output_dir, std::path::PathBuf::from("dist"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "project".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_entry(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }
}

fn default_entries() -> IndexMap<String, PathBuf> {
    IndexMap::from([("index".to_string(), PathBuf::from("./src/index.js"))])
}

fn default_dev_host() -> String {
    "localhost".to_string()
}

fn default_dev_port() -> u16 {
    DEFAULT_DEV_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_joined_to_root() {
        let layout = ProjectLayout::for_root("/work/app");
        assert_eq!(layout.output_path(), PathBuf::from("/work/app/dist"));
        assert_eq!(layout.source_path(), PathBuf::from("/work/app/src"));
        assert_eq!(layout.template_path(), PathBuf::from("/work/app/src/index.html"));
    }

    #[test]
    fn with_entry_keeps_insertion_order() {
        let layout = ProjectLayout::default().with_entry("admin", "./src/admin.js");
        let names: Vec<_> = layout.entries.keys().cloned().collect();
        assert_eq!(names, ["index", "admin"]);
    }
}
