use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{compile, normalized, without_cur_dir};
use crate::error::Result;

/// A single module transformation rule: files matching `test` (and admitted
/// by `include`/`exclude`) run through the `use` chain, last handler first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Regular expression tested against the module path
    pub test: String,

    /// Handler chain applied to matching modules
    #[serde(rename = "use")]
    pub handlers: Vec<Handler>,

    /// Only paths under one of these directories match (empty = no restriction)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    /// Paths matching this expression never match the rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl TransformRule {
    pub fn new(test: impl Into<String>, handlers: Vec<Handler>) -> Self {
        Self {
            test: test.into(),
            handlers,
            include: Vec::new(),
            exclude: None,
        }
    }

    pub fn with_include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include.push(dir.into());
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    /// Whether this rule applies to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPattern` if `test` or `exclude` is not a
    /// valid regular expression.
    pub fn matches(&self, path: &Path) -> Result<bool> {
        let subject = normalized(path);

        if !compile(&self.test)?.is_match(&subject) {
            return Ok(false);
        }

        if !self.include.is_empty() {
            let path = without_cur_dir(path);
            if !self.include.iter().any(|dir| path.starts_with(without_cur_dir(dir))) {
                return Ok(false);
            }
        }

        if let Some(exclude) = &self.exclude {
            if compile(exclude)?.is_match(&subject) {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Name of the first handler in the chain (the one the bundler runs last).
    pub fn first_loader(&self) -> Option<&'static str> {
        self.handlers.first().map(Handler::loader)
    }
}

/// A loader invocation inside a rule chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options")]
pub enum Handler {
    /// Pull styles out into a standalone stylesheet (production)
    #[serde(rename = "mini-css-extract-plugin/loader")]
    ExtractCss,

    /// Inject styles into the document at runtime (development)
    #[serde(rename = "vue-style-loader")]
    InjectStyle,

    #[serde(rename = "css-loader")]
    Css(CssLoaderOptions),

    #[serde(rename = "vue-loader")]
    Component(ComponentLoaderOptions),

    #[serde(rename = "babel-loader")]
    Script(ScriptLoaderOptions),

    #[serde(rename = "html-loader")]
    Markup(MarkupLoaderOptions),
}

impl Handler {
    pub fn loader(&self) -> &'static str {
        match self {
            Handler::ExtractCss => "mini-css-extract-plugin/loader",
            Handler::InjectStyle => "vue-style-loader",
            Handler::Css(_) => "css-loader",
            Handler::Component(_) => "vue-loader",
            Handler::Script(_) => "babel-loader",
            Handler::Markup(_) => "html-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssLoaderOptions {
    pub source_map: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLoaderOptions {
    /// Style chain used for `<style>` blocks inside single-file components
    pub css: Vec<Handler>,

    pub preserve_whitespace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLoaderOptions {
    /// Cache transpiled output between runs
    pub cache_directory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupLoaderOptions {
    pub minimize: bool,

    /// Rewrite asset references found in attributes
    pub attributes: bool,
}
