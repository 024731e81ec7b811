//! Shared helpers for command implementations.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use vbuild_config::{ConfigDiscovery, ConfigError, ProjectLayout};

use crate::error::{Result, ResultExt};

/// Prefix for environment overrides of layout fields (e.g. `VBUILD_DEV_PORT`).
pub(crate) const ENV_PREFIX: &str = "VBUILD_";

/// Absolute project root: `root` if given, else the working directory.
pub(crate) fn project_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => std::path::absolute(path)?,
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(crate::error::CliError::FileNotFound(root));
    }
    Ok(root)
}

/// Load the project layout.
///
/// Priority: environment (`VBUILD_*`) > vbuild.toml / package.json > defaults.
/// Entries are ordered, so they come only from the file; `VBUILD_ENTRIES` is
/// rejected.
pub(crate) fn load_layout(root: Option<&Path>) -> Result<ProjectLayout> {
    let root = project_root(root)?;

    if Env::prefixed(ENV_PREFIX)
        .iter()
        .any(|(key, _)| key.as_str().eq_ignore_ascii_case("entries"))
    {
        return Err(ConfigError::InvalidValue {
            field: format!("{ENV_PREFIX}ENTRIES"),
            hint: Some("Declare entries in vbuild.toml or package.json instead".to_string()),
        }
        .into());
    }

    let discovered = ConfigDiscovery::new(&root)
        .load_or_default()
        .context("Failed to load project layout")?;

    let layout: ProjectLayout = Figment::new()
        .merge(Serialized::defaults(&discovered))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| ConfigError::InvalidValue {
            field: "layout".to_string(),
            hint: Some(format!("Check {ENV_PREFIX}* variables: {e}")),
        })?;

    tracing::debug!(root = %root.display(), ?layout, "loaded project layout");
    // Figment dictionaries are unordered; keep the entry order from the file
    Ok(ProjectLayout {
        root,
        entries: discovered.entries,
        ..layout
    })
}

/// Serialize `value` as pretty or single-line JSON.
pub(crate) fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

/// Write `contents` to `path`, creating parent directories.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent)?;
    }
    fs::write(path, contents).with_path(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn env_overrides_layout_fields() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vbuild.toml"), "dev_port = 4000\n").unwrap();

        unsafe {
            std::env::set_var("VBUILD_DEV_PORT", "5000");
        }
        let layout = load_layout(Some(dir.path()));
        unsafe {
            std::env::remove_var("VBUILD_DEV_PORT");
        }

        let layout = layout.unwrap();
        assert_eq!(layout.dev_port, 5000);
        assert_eq!(layout.root, dir.path());
    }

    #[test]
    #[serial]
    fn file_values_survive_without_env() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vbuild.toml"), "output_dir = \"build\"\n").unwrap();

        let layout = load_layout(Some(dir.path())).unwrap();
        assert_eq!(layout.output_dir, PathBuf::from("build"));
        assert_eq!(layout.dev_port, 3002);
    }

    #[test]
    #[serial]
    fn entries_from_env_are_rejected() {
        let dir = TempDir::new().unwrap();

        unsafe {
            std::env::set_var("VBUILD_ENTRIES", "{admin=\"./src/admin.js\"}");
        }
        let result = load_layout(Some(dir.path()));
        unsafe {
            std::env::remove_var("VBUILD_ENTRIES");
        }

        match result.unwrap_err() {
            crate::error::CliError::Config(ConfigError::InvalidValue { field, .. }) => {
                assert_eq!(field, "VBUILD_ENTRIES")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_root_is_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            project_root(Some(&missing)).unwrap_err(),
            crate::error::CliError::FileNotFound(_)
        ));
    }

    #[test]
    fn write_output_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/nested/config.json");
        write_output(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
