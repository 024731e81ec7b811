use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Available vbuild subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the bundler configuration and print it as JSON
    ///
    /// Writes to stdout unless --output is given, so the result can be piped
    /// into the bundler.
    Resolve(ResolveArgs),

    /// Show the app bootstrap and route table, or look up one path
    Routes(RoutesArgs),

    /// Resolve and validate without emitting the configuration
    ///
    /// Checks both modes unless --mode is given.
    Check(CheckArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build mode (defaults to NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root containing vbuild.toml or package.json
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Skip the on-disk entry and template checks
    #[arg(long)]
    pub skip_fs_check: bool,
}

/// Arguments for the routes command
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Look up a single path instead of printing the whole bootstrap
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// Build mode used for the bootstrap's production tip (defaults to NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only check this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root containing vbuild.toml or package.json
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
