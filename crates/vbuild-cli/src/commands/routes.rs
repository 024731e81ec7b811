//! Routes command implementation.

use vbuild_config::{AppBootstrap, Route};

use crate::cli::{effective_mode, RoutesArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};

/// Execute the routes command.
///
/// Without `--path`, prints the whole app bootstrap (mount point, production
/// tip and route table). With `--path`, prints the matching route or fails.
pub fn execute(args: RoutesArgs) -> Result<()> {
    let app = AppBootstrap::new(effective_mode(args.mode))?;

    let json = match &args.path {
        Some(path) => utils::to_json(lookup(&app, path)?, false)?,
        None => {
            for route in app.routes.iter() {
                tracing::debug!(path = %route.path, component = %route.component, "route");
            }
            utils::to_json(&app, false)?
        }
    };

    println!("{json}");
    Ok(())
}

fn lookup<'a>(app: &'a AppBootstrap, path: &str) -> Result<&'a Route> {
    let route = app
        .routes
        .lookup(path)
        .ok_or_else(|| CliError::RouteNotFound(path.to_string()))?;
    tracing::debug!(path, component = %route.component, "matched route");
    Ok(route)
}
