//! Resolved build configuration handed to the external bundler.

pub(crate) mod helpers;
mod optimization;
mod plugin;
mod rules;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use optimization::{CacheGroup, ChunkSelection, OptimizationDescriptor, RuntimeChunk, SplitChunks};
pub use plugin::{
    CleanOptions, DocumentTemplateOptions, MinifyOptions, PluginDescriptor, PluginKind,
    StyleExtractionOptions,
};
pub use rules::{
    ComponentLoaderOptions, CssLoaderOptions, Handler, MarkupLoaderOptions, ScriptLoaderOptions,
    TransformRule,
};

use crate::dev::DevServerDescriptor;
use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Complete build configuration for one mode.
///
/// Produced once by [`crate::BuildConfigResolver`] and never mutated
/// afterwards. Exactly one of `dev_server` (development) and `optimization`
/// (production) is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    pub mode: Mode,

    /// Bundle name → source file
    pub entry: IndexMap<String, PathBuf>,

    pub output: OutputOptions,

    pub module: ModuleOptions,

    #[serde(default)]
    pub resolve: ResolveOptions,

    pub plugins: Vec<PluginDescriptor>,

    /// Source map style (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationDescriptor>,
}

/// Output naming rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Directory receiving emitted files
    pub path: PathBuf,

    /// Bundle filename template; `[name]` is the entry key
    pub filename: String,

    /// Prefix used when the document references emitted assets
    pub public_path: String,
}

impl OutputOptions {
    /// Whether the filename template carries a content hash.
    pub fn is_content_hashed(&self) -> bool {
        self.filename.contains(helpers::CONTENT_HASH_TOKEN)
    }

    /// Expand `[name]` for an entry, leaving hash placeholders intact.
    ///
    /// ```
    /// use vbuild_config::OutputOptions;
    ///
    /// let output = OutputOptions {
    ///     path: "dist".into(),
    ///     filename: "javascript/[name].[contenthash:5].js".into(),
    ///     public_path: "./".into(),
    /// };
    /// assert_eq!(output.filename_for("index"), "javascript/index.[contenthash:5].js");
    /// ```
    pub fn filename_for(&self, entry: &str) -> String {
        self.filename.replace("[name]", entry)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Ordered; the first matching rule applies
    pub rules: Vec<TransformRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Extensions tried when an import omits one
    #[serde(default = "helpers::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: helpers::default_extensions(),
        }
    }
}

impl BuildConfiguration {
    /// First transform rule applying to `path`.
    pub fn rule_for(&self, path: &Path) -> Result<Option<&TransformRule>> {
        for rule in &self.module.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    pub fn plugin_count(&self, kind: PluginKind) -> usize {
        self.plugins.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin_count(kind) > 0
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Create from serde_json::Value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
