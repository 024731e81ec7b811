//! Check command implementation.
//!
//! Resolves the configuration for one or both modes with filesystem
//! validation and reports the outcome without emitting anything.

use vbuild_config::{BuildConfigResolver, Mode};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns the first resolution failure; later modes are not checked.
pub fn execute(args: CheckArgs) -> Result<()> {
    let resolver = BuildConfigResolver::new(utils::load_layout(args.root.as_deref())?);
    ui::info(&format!("Checking project at {}", resolver.layout().root.display()));

    let modes = match args.mode {
        Some(mode) => vec![Mode::from(mode)],
        None => vec![Mode::Development, Mode::Production],
    };

    for mode in modes {
        match resolver.resolve(mode) {
            Ok(config) => ui::success(&format!(
                "{} configuration is valid ({} entries, {} plugins)",
                mode,
                config.entry.len(),
                config.plugins.len()
            )),
            Err(err) => {
                ui::error(&format!("{} configuration is invalid", mode));
                return Err(err.into());
            }
        }
    }

    Ok(())
}
