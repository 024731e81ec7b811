//! Resolve command implementation.

use vbuild_config::{BuildConfigResolver, BuildConfiguration, Mode, ProjectLayout, SchemaValidator};

use crate::cli::{effective_mode, ResolveArgs};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the resolve command.
///
/// 1. Pick the mode (`--mode`, else `NODE_ENV`)
/// 2. Load the project layout
/// 3. Resolve and validate the configuration
/// 4. Print JSON to stdout, or write it to `--output`
pub fn execute(args: ResolveArgs) -> Result<()> {
    let mode = effective_mode(args.mode);
    let layout = utils::load_layout(args.root.as_deref())?;
    let config = resolve_with(layout, mode, args.skip_fs_check)?;
    let json = utils::to_json(&config, args.compact)?;

    match &args.output {
        Some(path) => {
            utils::write_output(path, &json)?;
            ui::print_config_summary(&config);
            ui::success(&format!("Wrote {} configuration to {}", mode, path.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}

pub(crate) fn resolve_with(
    layout: ProjectLayout,
    mode: Mode,
    skip_fs_check: bool,
) -> Result<BuildConfiguration> {
    let config = if skip_fs_check {
        ui::warning("Skipping entry and template checks");
        BuildConfigResolver::with_validator(layout, SchemaValidator).resolve(mode)?
    } else {
        BuildConfigResolver::new(layout).resolve(mode)?
    };
    Ok(config)
}
