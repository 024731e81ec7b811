//! vbuild CLI - mode-aware bundler configuration for a single-page app.
//!
//! This crate exposes the configuration resolver from `vbuild-config` on the
//! command line. The resolved configuration is written as JSON for the
//! external bundler to consume.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `resolve`, `routes` and `check`
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines and summaries on stderr
//!
//! # Example
//!
//! ```rust
//! use vbuild_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
