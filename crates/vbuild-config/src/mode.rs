//! Build mode discriminant.
//!
//! The mode is read once from the process environment and then passed
//! explicitly to the resolver. Nothing else in the crate consults `NODE_ENV`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable carrying the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

const PRODUCTION: &str = "production";
const DEVELOPMENT: &str = "development";

/// Build mode. Exactly two modes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Interpret a raw flag value.
    ///
    /// Only the exact literal `"production"` selects production. Every other
    /// value, including an absent one, falls back to development.
    ///
    /// ```
    /// use vbuild_config::Mode;
    ///
    /// assert_eq!(Mode::from_flag(Some("production")), Mode::Production);
    /// assert_eq!(Mode::from_flag(Some("staging")), Mode::Development);
    /// assert_eq!(Mode::from_flag(None), Mode::Development);
    /// ```
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(PRODUCTION) => Mode::Production,
            _ => Mode::Development,
        }
    }

    /// Read the mode from `NODE_ENV`.
    pub fn from_env() -> Self {
        let raw = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_flag(raw.as_deref());
        tracing::debug!(raw = ?raw, %mode, "read build mode from environment");
        mode
    }

    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => DEVELOPMENT,
            Mode::Production => PRODUCTION,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
