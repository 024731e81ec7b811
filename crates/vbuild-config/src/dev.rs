//! Development server descriptor.
//!
//! The server itself is an external process; this is only the settings block
//! handed to it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerDescriptor {
    /// Directory served as static content
    pub content_base: PathBuf,

    /// Gzip responses
    #[serde(default = "default_true")]
    pub compress: bool,

    #[serde(default = "default_host")]
    pub host: String,

    pub port: u16,

    /// Launch a browser once the server is up
    #[serde(default = "default_true")]
    pub open: bool,

    #[serde(default = "default_true")]
    pub hot_reload: bool,

    /// Suppress bundle info on every rebuild
    #[serde(default = "default_true")]
    pub no_info: bool,

    #[serde(default)]
    pub overlay: Overlay,

    #[serde(default = "default_true")]
    pub disable_host_check: bool,
}

impl DevServerDescriptor {
    pub fn new(content_base: impl Into<PathBuf>, host: impl Into<String>, port: u16) -> Self {
        Self {
            content_base: content_base.into(),
            compress: true,
            host: host.into(),
            port,
            open: true,
            hot_reload: true,
            no_info: true,
            overlay: Overlay::default(),
            disable_host_check: true,
        }
    }

    pub fn address(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// In-page compile diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub errors: bool,
    pub warnings: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            errors: true,
            warnings: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "localhost".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enables_hot_reload_and_overlay_errors() {
        let server = DevServerDescriptor::new("dist", "localhost", 3002);
        assert!(server.hot_reload);
        assert!(server.compress);
        assert!(server.overlay.errors);
        assert!(!server.overlay.warnings);
        assert_eq!(server.address(), "http://localhost:3002");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let server: DevServerDescriptor =
            serde_json::from_value(serde_json::json!({ "contentBase": "dist", "port": 8080 }))
                .unwrap();
        assert_eq!(server.host, "localhost");
        assert!(server.open);
        assert!(server.hot_reload);
    }
}
