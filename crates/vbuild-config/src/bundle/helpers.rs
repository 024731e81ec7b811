use std::path::{Component, Path, PathBuf};

use regex::Regex;

use crate::error::{ConfigError, Result};

pub(crate) const PRODUCTION_FILENAME: &str = "javascript/[name].[contenthash:5].js";
pub(crate) const DEVELOPMENT_FILENAME: &str = "[name].js";
pub(crate) const CONTENT_HASH_TOKEN: &str = "[contenthash";
pub(crate) const STYLESHEET_FILENAME: &str = "stylesheets/[name].[contenthash:5].css";

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("src/index.html")
}

pub(crate) fn default_extensions() -> Vec<String> {
    [".js", ".vue", ".styl"].map(String::from).to_vec()
}

/// Compile a rule or cache-group pattern.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Forward-slash form of a path, so patterns like `node_modules` match on
/// every platform.
pub(crate) fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// `path` with `.` components dropped, so `./src/App.vue` and `src/App.vue`
/// compare equal under `Path::starts_with`.
pub(crate) fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
