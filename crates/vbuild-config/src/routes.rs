//! Client-side route table handed to the router.

use matchit::Router;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Document title shown while the route is active
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    /// Component rendered for this route
    pub component: String,
    pub meta: RouteMeta,
}

impl Route {
    /// Route whose name, component and title are all `name`.
    pub fn named(path: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: path.into(),
            component: name.clone(),
            meta: RouteMeta { title: name.clone() },
            name,
        }
    }
}

/// Ordered route records with path lookup.
#[derive(Debug, Clone, Serialize)]
pub struct RouteTable {
    routes: Vec<Route>,

    #[serde(skip)]
    router: Router<usize>,
}

impl RouteTable {
    /// Build a table, rejecting malformed or conflicting paths.
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        let router = build_router(&routes)?;
        Ok(Self { routes, router })
    }

    /// The application's route table: `/demo` renders `Demo`.
    pub fn demo() -> Result<Self> {
        Self::new(vec![Route::named("/demo", "Demo")])
    }

    /// Route matching `path`, if any.
    ///
    /// ```
    /// use vbuild_config::RouteTable;
    ///
    /// let table = RouteTable::demo().unwrap();
    /// let route = table.lookup("/demo").unwrap();
    /// assert_eq!(route.component, "Demo");
    /// assert!(table.lookup("/missing").is_none());
    /// ```
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        let matched = self.router.at(path).ok()?;
        self.routes.get(*matched.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn build_router(routes: &[Route]) -> Result<Router<usize>> {
    let mut router = Router::new();
    for (index, route) in routes.iter().enumerate() {
        router
            .insert(route.path.as_str(), index)
            .map_err(|e| ConfigError::InvalidValue {
                field: format!("routes[{index}].path"),
                hint: Some(e.to_string()),
            })?;
    }
    Ok(router)
}

impl PartialEq for RouteTable {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
    }
}
