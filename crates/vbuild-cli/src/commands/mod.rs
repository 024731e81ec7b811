//! Command implementations for the vbuild CLI.
//!
//! - [`resolve`] - Emit the bundler configuration
//! - [`routes`] - Inspect the app bootstrap and route table
//! - [`check`] - Validate both modes without emitting
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod resolve;
pub mod routes;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
pub use routes::execute as routes_execute;
