use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::helpers::default_true;

/// Plugin registered with the external bundler.
///
/// List order is preserved in the emitted configuration because it decides
/// the order of generated assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginDescriptor {
    /// Single-file component support; required in every mode
    #[serde(rename = "vue-loader-plugin")]
    ComponentLoader,

    /// Emits the HTML document that loads the bundles
    #[serde(rename = "html-webpack-plugin")]
    DocumentTemplate(DocumentTemplateOptions),

    /// Wipes the output directory once before building
    #[serde(rename = "clean-webpack-plugin")]
    Clean(CleanOptions),

    /// Writes extracted styles to their own files
    #[serde(rename = "mini-css-extract-plugin")]
    StyleExtraction(StyleExtractionOptions),

    #[serde(rename = "hot-module-replacement-plugin")]
    HotModuleReplacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    ComponentLoader,
    DocumentTemplate,
    Clean,
    StyleExtraction,
    HotModuleReplacement,
}

impl PluginDescriptor {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginDescriptor::ComponentLoader => PluginKind::ComponentLoader,
            PluginDescriptor::DocumentTemplate(_) => PluginKind::DocumentTemplate,
            PluginDescriptor::Clean(_) => PluginKind::Clean,
            PluginDescriptor::StyleExtraction(_) => PluginKind::StyleExtraction,
            PluginDescriptor::HotModuleReplacement => PluginKind::HotModuleReplacement,
        }
    }
}

/// HTML document generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTemplateOptions {
    /// Source template
    pub template: PathBuf,

    /// Output filename (relative to the output directory)
    pub filename: String,

    pub minify: MinifyOptions,

    /// Append a cache-busting query to every injected asset
    #[serde(default = "default_true")]
    pub hash: bool,

    /// Assets matching this expression are inlined into the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    pub collapse_whitespace: bool,
    pub remove_attribute_quotes: bool,
}

impl MinifyOptions {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            collapse_whitespace: enabled,
            remove_attribute_quotes: enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.collapse_whitespace && self.remove_attribute_quotes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOptions {
    /// Log every removed file
    pub verbose: bool,

    /// Allow removing assets the bundler itself produced
    pub protect_webpack_assets: bool,

    pub clean_once_before_build_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleExtractionOptions {
    pub filename: String,
}
