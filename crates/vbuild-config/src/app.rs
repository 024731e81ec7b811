//! Application bootstrap descriptor: where the UI root mounts and which
//! router it carries.

use serde::Serialize;

use crate::error::Result;
use crate::mode::Mode;
use crate::routes::RouteTable;

pub const MOUNT_SELECTOR: &str = "#app";
pub const ROOT_COMPONENT: &str = "App";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBootstrap {
    /// DOM selector the root instance is mounted on
    pub mount_selector: String,

    /// Component rendered at the root
    pub root_component: String,

    /// Framework production tip, enabled only for production builds
    pub production_tip: bool,

    pub routes: RouteTable,
}

impl AppBootstrap {
    /// Bootstrap for `mode` carrying the demo route table.
    ///
    /// # Errors
    ///
    /// Fails only if a route path is rejected by the router.
    pub fn new(mode: Mode) -> Result<Self> {
        Ok(Self {
            mount_selector: MOUNT_SELECTOR.to_string(),
            root_component: ROOT_COMPONENT.to_string(),
            production_tip: mode.is_production(),
            routes: RouteTable::demo()?,
        })
    }
}
