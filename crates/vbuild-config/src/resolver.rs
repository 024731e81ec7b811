//! Mode-driven build configuration resolution.
//!
//! A resolved configuration is assembled from a mode-neutral base plus one of
//! two independent builders. Neither builder mutates shared state; each call
//! to [`BuildConfigResolver::resolve`] produces a fresh value.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::bundle::helpers::{DEVELOPMENT_FILENAME, PRODUCTION_FILENAME, STYLESHEET_FILENAME};
use crate::bundle::{
    BuildConfiguration, CacheGroup, ChunkSelection, CleanOptions, ComponentLoaderOptions,
    CssLoaderOptions, DocumentTemplateOptions, Handler, MarkupLoaderOptions, MinifyOptions,
    ModuleOptions, OptimizationDescriptor, OutputOptions, PluginDescriptor, ResolveOptions,
    RuntimeChunk, ScriptLoaderOptions, SplitChunks, StyleExtractionOptions, TransformRule,
};
use crate::dev::DevServerDescriptor;
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::mode::Mode;
use crate::validation::{ConfigValidator, FsValidator};

const DEVELOPMENT_DEVTOOL: &str = "eval-source-map";

/// Resolves a [`BuildConfiguration`] for a project layout.
///
/// # Example
///
/// ```
/// use vbuild_config::{BuildConfigResolver, Mode, ProjectLayout, SchemaValidator};
///
/// let resolver = BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator);
/// let config = resolver.resolve(Mode::Development).unwrap();
/// assert_eq!(config.output.filename, "[name].js");
/// assert!(config.optimization.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BuildConfigResolver<V = FsValidator> {
    layout: ProjectLayout,
    validator: V,
}

impl BuildConfigResolver<FsValidator> {
    /// Resolver that checks entries and the template exist under the layout root.
    pub fn new(layout: ProjectLayout) -> Self {
        let validator = FsValidator::new(&layout.root);
        Self { layout, validator }
    }
}

impl<V: ConfigValidator> BuildConfigResolver<V> {
    pub fn with_validator(layout: ProjectLayout, validator: V) -> Self {
        Self { layout, validator }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Build and validate the configuration for `mode`.
    ///
    /// # Errors
    ///
    /// Fails with the validator's error when an entry or the template is
    /// missing, or a pattern is malformed. Nothing is retried.
    pub fn resolve(&self, mode: Mode) -> Result<BuildConfiguration> {
        let config = match mode {
            Mode::Production => self.production(),
            Mode::Development => self.development(),
        };

        self.validator.validate(&config)?;

        info!(
            %mode,
            entries = config.entry.len(),
            plugins = config.plugins.len(),
            "resolved build configuration"
        );
        Ok(config)
    }

    /// Resolve for the mode named by `NODE_ENV`.
    pub fn resolve_from_env(&self) -> Result<BuildConfiguration> {
        self.resolve(Mode::from_env())
    }

    fn production(&self) -> BuildConfiguration {
        debug!("assembling production configuration");
        let base = self.base(Mode::Production);

        let plugins = base
            .plugins
            .into_iter()
            .chain([
                PluginDescriptor::Clean(CleanOptions {
                    verbose: true,
                    protect_webpack_assets: false,
                    clean_once_before_build_patterns: vec![
                        "**/*".to_string(),
                        self.layout.output_path().to_string_lossy().into_owned(),
                    ],
                }),
                PluginDescriptor::StyleExtraction(StyleExtractionOptions {
                    filename: STYLESHEET_FILENAME.to_string(),
                }),
            ])
            .collect();

        BuildConfiguration {
            plugins,
            optimization: Some(optimization()),
            ..base
        }
    }

    fn development(&self) -> BuildConfiguration {
        debug!("assembling development configuration");
        let base = self.base(Mode::Development);

        let plugins = base
            .plugins
            .into_iter()
            .chain([PluginDescriptor::HotModuleReplacement])
            .collect();

        BuildConfiguration {
            plugins,
            devtool: Some(DEVELOPMENT_DEVTOOL.to_string()),
            dev_server: Some(DevServerDescriptor::new(
                self.layout.output_path(),
                self.layout.dev_host.clone(),
                self.layout.dev_port,
            )),
            ..base
        }
    }

    /// Pieces present in both modes. Only the style chain, output naming and
    /// template minification depend on `mode` here.
    fn base(&self, mode: Mode) -> BuildConfiguration {
        let prod = mode.is_production();

        let output = OutputOptions {
            path: self.layout.output_path(),
            filename: if prod { PRODUCTION_FILENAME } else { DEVELOPMENT_FILENAME }.to_string(),
            public_path: if prod { "./" } else { "/" }.to_string(),
        };

        BuildConfiguration {
            mode,
            entry: self.layout.entries.clone(),
            output,
            module: ModuleOptions {
                rules: self.rules(mode),
            },
            resolve: ResolveOptions::default(),
            plugins: vec![
                PluginDescriptor::ComponentLoader,
                PluginDescriptor::DocumentTemplate(DocumentTemplateOptions {
                    template: self.layout.template_path(),
                    filename: "index.html".to_string(),
                    minify: MinifyOptions::enabled(prod),
                    hash: true,
                    inline_source: Some(".(js|css)".to_string()),
                }),
            ],
            devtool: None,
            dev_server: None,
            optimization: None,
        }
    }

    fn rules(&self, mode: Mode) -> Vec<TransformRule> {
        let prod = mode.is_production();
        let styles = style_chain(mode);

        vec![
            TransformRule::new(r"(?i)\.css$", styles.clone()),
            TransformRule::new(
                r"\.vue$",
                vec![Handler::Component(ComponentLoaderOptions {
                    css: styles,
                    preserve_whitespace: false,
                })],
            )
            .with_include(self.layout.source_path()),
            TransformRule::new(
                r"\.js$",
                vec![Handler::Script(ScriptLoaderOptions {
                    cache_directory: !prod,
                })],
            )
            .with_exclude("node_modules"),
            TransformRule::new(
                r"\.html$",
                vec![Handler::Markup(MarkupLoaderOptions {
                    minimize: true,
                    attributes: false,
                })],
            ),
        ]
    }
}

/// Resolve `mode` for `layout` with filesystem validation.
pub fn resolve(mode: Mode, layout: &ProjectLayout) -> Result<BuildConfiguration> {
    BuildConfigResolver::new(layout.clone()).resolve(mode)
}

fn style_chain(mode: Mode) -> Vec<Handler> {
    let first = match mode {
        Mode::Production => Handler::ExtractCss,
        Mode::Development => Handler::InjectStyle,
    };
    vec![
        first,
        Handler::Css(CssLoaderOptions {
            source_map: !mode.is_production(),
        }),
    ]
}

fn optimization() -> OptimizationDescriptor {
    let cache_groups = IndexMap::from([
        ("vendor".to_string(), CacheGroup::new("node_modules", "vendor")),
        ("main".to_string(), CacheGroup::new("src", "main")),
    ]);

    OptimizationDescriptor {
        minimize: true,
        split_chunks: SplitChunks {
            chunks: ChunkSelection::All,
            min_chunks: 3,
            max_async_requests: 5,
            max_initial_requests: 5,
            cache_groups,
        },
        runtime_chunk: RuntimeChunk {
            name: "runtime".to_string(),
        },
    }
}
