pub mod app;
pub mod bundle;
pub mod dev;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod mode;
pub mod resolver;
pub mod routes;
pub mod validation;

// Re-export main types
pub use app::*;
pub use bundle::*;
pub use dev::*;
pub use error::*;
pub use layout::*;
pub use mode::*;
pub use routes::*;

// Re-export discovery, resolution and validation
pub use discovery::{ConfigDiscovery, CONFIG_FILE};
pub use resolver::{resolve, BuildConfigResolver};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
