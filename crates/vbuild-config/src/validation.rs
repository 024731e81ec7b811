//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use crate::bundle::helpers::compile;
use crate::bundle::{BuildConfiguration, PluginDescriptor, PluginKind};
use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a resolved build configuration
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use vbuild_config::{BuildConfigResolver, ConfigValidator, Mode, ProjectLayout, SchemaValidator};
///
/// let resolver = BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator);
/// let config = resolver.resolve(Mode::Production).unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, path) in &config.entry {
            if name.trim().is_empty() || path.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry '{name}' has an empty name or path"),
                    hint: Some("Every entry needs a bundle name and a source file".to_string()),
                });
            }
        }

        // Every pattern must compile before the bundler sees it
        for rule in &config.module.rules {
            compile(&rule.test)?;
            if let Some(exclude) = &rule.exclude {
                compile(exclude)?;
            }
        }

        validate_output(config)?;
        validate_descriptors(config)?;
        validate_plugins(config)
    }
}

fn validate_output(config: &BuildConfiguration) -> Result<()> {
    let hashed = config.output.is_content_hashed();
    match config.mode {
        Mode::Production if !hashed => Err(ConfigError::SchemaValidation {
            message: format!(
                "production filename '{}' has no content hash",
                config.output.filename
            ),
            hint: Some("Add a [contenthash] placeholder so clients drop stale bundles".to_string()),
        }),
        Mode::Development if hashed => Err(ConfigError::SchemaValidation {
            message: format!(
                "development filename '{}' carries a content hash",
                config.output.filename
            ),
            hint: Some("Use a stable name such as [name].js for incremental rebuilds".to_string()),
        }),
        _ => Ok(()),
    }
}

fn validate_descriptors(config: &BuildConfiguration) -> Result<()> {
    let (expect_dev, expect_opt) = match config.mode {
        Mode::Development => (true, false),
        Mode::Production => (false, true),
    };

    if config.dev_server.is_some() != expect_dev {
        return Err(ConfigError::SchemaValidation {
            message: format!(
                "dev server descriptor must be {} in {} mode",
                if expect_dev { "present" } else { "absent" },
                config.mode
            ),
            hint: None,
        });
    }

    if let Some(optimization) = &config.optimization {
        for group in optimization.split_chunks.cache_groups.values() {
            compile(&group.test)?;
        }
    }

    if config.optimization.is_some() != expect_opt {
        return Err(ConfigError::SchemaValidation {
            message: format!(
                "optimization descriptor must be {} in {} mode",
                if expect_opt { "present" } else { "absent" },
                config.mode
            ),
            hint: None,
        });
    }

    Ok(())
}

fn validate_plugins(config: &BuildConfiguration) -> Result<()> {
    if !config.has_plugin(PluginKind::ComponentLoader) {
        return Err(ConfigError::SchemaValidation {
            message: "component loader plugin is missing".to_string(),
            hint: Some("Single-file components cannot be compiled without it".to_string()),
        });
    }

    if config.plugin_count(PluginKind::Clean) > 1 {
        return Err(ConfigError::SchemaValidation {
            message: "more than one cleanup plugin registered".to_string(),
            hint: None,
        });
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that every entry and the document
/// template exist on disk.
///
/// # Example
///
/// ```no_run
/// use vbuild_config::{BuildConfigResolver, Mode, ProjectLayout};
///
/// let layout = ProjectLayout::for_root(".");
/// let config = BuildConfigResolver::new(layout).resolve(Mode::Production).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entry.values() {
            let path = self.root.join(entry);
            if !path.is_file() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        // Template paths are already joined to the project root by the resolver
        for plugin in &config.plugins {
            if let PluginDescriptor::DocumentTemplate(options) = plugin {
                if !options.template.is_file() {
                    return Err(ConfigError::TemplateNotFound {
                        path: options.template.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::TransformRule;
    use crate::{BuildConfigResolver, ProjectLayout};

    fn resolved(mode: Mode) -> BuildConfiguration {
        BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator)
            .resolve(mode)
            .unwrap()
    }

    #[test]
    fn schema_validator_accepts_resolved_configs() {
        assert!(validate_schema(&resolved(Mode::Development)).is_ok());
        assert!(validate_schema(&resolved(Mode::Production)).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_entries() {
        let mut config = resolved(Mode::Development);
        config.entry.clear();
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::NoEntries
        ));
    }

    #[test]
    fn schema_validator_rejects_unhashed_production_output() {
        let mut config = resolved(Mode::Production);
        config.output.filename = "[name].js".to_string();
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_hashed_development_output() {
        let mut config = resolved(Mode::Development);
        config.output.filename = "[name].[contenthash].js".to_string();
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_mixed_descriptors() {
        let mut config = resolved(Mode::Production);
        config.dev_server = resolved(Mode::Development).dev_server;
        assert!(validate_schema(&config).is_err());

        let mut config = resolved(Mode::Development);
        config.optimization = resolved(Mode::Production).optimization;
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn schema_validator_rejects_malformed_pattern() {
        let mut config = resolved(Mode::Development);
        config.module.rules.push(TransformRule::new("(unclosed", vec![]));
        assert!(matches!(
            validate_schema(&config).unwrap_err(),
            ConfigError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn schema_validator_requires_component_loader() {
        let mut config = resolved(Mode::Development);
        config.plugins.retain(|p| p.kind() != PluginKind::ComponentLoader);
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn fs_validator_reports_missing_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = validate_fs(&resolved(Mode::Development), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound { .. }));
    }
}
