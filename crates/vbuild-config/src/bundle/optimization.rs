use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bundle::helpers::{compile, normalized};
use crate::error::Result;

/// Production-only optimization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationDescriptor {
    pub minimize: bool,

    pub split_chunks: SplitChunks,

    /// Runtime module extracted per entry
    pub runtime_chunk: RuntimeChunk,
}

/// Chunk-splitting policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    #[serde(default)]
    pub chunks: ChunkSelection,

    /// Minimum number of chunks sharing a module before it is extracted
    pub min_chunks: usize,

    /// Maximum parallel requests when loading on demand
    pub max_async_requests: usize,

    /// Maximum parallel requests at an entry point
    pub max_initial_requests: usize,

    /// Group rules, tried in insertion order
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl SplitChunks {
    /// Name of the first cache group that claims `module`.
    ///
    /// ```
    /// use vbuild_config::{BuildConfigResolver, Mode, ProjectLayout, SchemaValidator};
    /// use std::path::Path;
    ///
    /// let resolver = BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator);
    /// let config = resolver.resolve(Mode::Production).unwrap();
    /// let split = &config.optimization.unwrap().split_chunks;
    /// assert_eq!(split.group_for(Path::new("node_modules/vue/dist/vue.js")).unwrap(), Some("vendor"));
    /// ```
    pub fn group_for(&self, module: &Path) -> Result<Option<&str>> {
        for group in self.cache_groups.values() {
            if group.matches(module)? {
                return Ok(Some(group.name.as_str()));
            }
        }
        Ok(None)
    }
}

/// Which chunks take part in splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    Initial,
    Async,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheGroup {
    /// Regular expression tested against the module path
    pub test: String,

    /// Output chunk name
    pub name: String,

    /// Ignore size and request thresholds for this group
    pub enforce: bool,
}

impl CacheGroup {
    pub fn new(test: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            name: name.into(),
            enforce: true,
        }
    }

    pub fn matches(&self, module: &Path) -> Result<bool> {
        Ok(compile(&self.test)?.is_match(&normalized(module)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeChunk {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> SplitChunks {
        let mut cache_groups = IndexMap::new();
        cache_groups.insert("vendor".to_string(), CacheGroup::new("node_modules", "vendor"));
        cache_groups.insert("main".to_string(), CacheGroup::new("src", "main"));
        SplitChunks {
            chunks: ChunkSelection::All,
            min_chunks: 3,
            max_async_requests: 5,
            max_initial_requests: 5,
            cache_groups,
        }
    }

    #[test]
    fn first_matching_group_wins() {
        let split = groups();
        // Matches both patterns; vendor is declared first.
        let module = Path::new("node_modules/lib/src/index.js");
        assert_eq!(split.group_for(module).unwrap(), Some("vendor"));
        assert_eq!(split.group_for(Path::new("src/Demo.vue")).unwrap(), Some("main"));
        assert_eq!(split.group_for(Path::new("assets/logo.png")).unwrap(), None);
    }

    #[test]
    fn windows_separators_are_normalized() {
        let split = groups();
        let module = Path::new(r"C:\app\node_modules\vue\index.js");
        assert_eq!(split.group_for(module).unwrap(), Some("vendor"));
    }
}
