//! Command-line interface definition for vbuild.
//!
//! # Command Structure
//!
//! - `vbuild resolve` - Emit the bundler configuration for a mode as JSON
//! - `vbuild routes` - Print the app bootstrap or look up a route
//! - `vbuild check` - Resolve and validate without emitting anything

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ResolveArgs, RoutesArgs};
pub use enums::*;

/// vbuild - mode-aware bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "vbuild",
    version,
    about = "Resolve development/production bundler configuration",
    long_about = "vbuild resolves the bundler configuration for a single-page app.\n\
                  The mode comes from --mode or, when omitted, from NODE_ENV: the exact\n\
                  value 'production' selects production, anything else development."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
