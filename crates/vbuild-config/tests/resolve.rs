//! End-to-end resolution against real project trees.

use regex::Regex;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vbuild_config::{
    resolve, BuildConfigResolver, BuildConfiguration, ConfigError, Mode, PluginKind,
    ProjectLayout, SchemaValidator, MODE_ENV_VAR,
};

fn scaffold() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("src");
    fs::create_dir_all(&src).expect("create src");
    fs::write(src.join("index.js"), "import Vue from 'vue';\n").expect("write entry");
    fs::write(src.join("index.html"), "<div id=\"app\"></div>\n").expect("write template");
    dir
}

#[test]
fn production_uses_hashed_names_and_optimization() {
    let dir = scaffold();
    let config = resolve(Mode::Production, &ProjectLayout::for_root(dir.path())).unwrap();

    let pattern = Regex::new(r"^javascript/\[name\]\.\[contenthash(:\d+)?\]\.js$").unwrap();
    assert!(pattern.is_match(&config.output.filename), "{}", config.output.filename);
    assert!(config.output.is_content_hashed());
    assert_eq!(config.output.public_path, "./");

    assert!(config.dev_server.is_none());
    let optimization = config.optimization.as_ref().expect("optimization present");
    assert!(optimization.minimize);
    assert_eq!(optimization.split_chunks.min_chunks, 3);
    assert_eq!(optimization.split_chunks.max_async_requests, 5);
    assert_eq!(optimization.split_chunks.max_initial_requests, 5);
    assert_eq!(optimization.runtime_chunk.name, "runtime");

    let groups: Vec<_> = optimization.split_chunks.cache_groups.keys().cloned().collect();
    assert_eq!(groups, ["vendor", "main"]);

    assert_eq!(config.plugin_count(PluginKind::Clean), 1);
    assert_eq!(config.plugin_count(PluginKind::StyleExtraction), 1);
    assert_eq!(config.plugin_count(PluginKind::HotModuleReplacement), 0);
}

#[test]
fn development_uses_stable_names_and_dev_server() {
    let dir = scaffold();
    let config = resolve(Mode::Development, &ProjectLayout::for_root(dir.path())).unwrap();

    assert_eq!(config.output.filename, "[name].js");
    assert!(!config.output.is_content_hashed());
    assert_eq!(config.output.public_path, "/");
    assert!(config.optimization.is_none());

    let server = config.dev_server.as_ref().expect("dev server present");
    assert_eq!(server.port, 3002);
    assert!(server.hot_reload);
    assert!(server.compress);
    assert!(server.open);
    assert!(server.overlay.errors);
    assert_eq!(server.content_base, dir.path().join("dist"));

    assert_eq!(config.plugin_count(PluginKind::HotModuleReplacement), 1);
    assert_eq!(config.plugin_count(PluginKind::Clean), 0);
    assert_eq!(config.plugin_count(PluginKind::StyleExtraction), 0);
}

#[test]
fn resolution_is_idempotent() {
    let dir = scaffold();
    let resolver = BuildConfigResolver::new(ProjectLayout::for_root(dir.path()));
    for mode in [Mode::Development, Mode::Production] {
        let first = resolver.resolve(mode).unwrap();
        let second = resolver.resolve(mode).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_value().unwrap(), second.to_value().unwrap());
    }
}

#[test]
fn unknown_flags_resolve_as_development() {
    let resolver = BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator);
    let development = resolver.resolve(Mode::Development).unwrap();

    for flag in [None, Some(""), Some("dev"), Some("PRODUCTION"), Some("staging")] {
        let config = resolver.resolve(Mode::from_flag(flag)).unwrap();
        assert_eq!(config, development, "flag {flag:?}");
    }
}

#[test]
fn missing_entry_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = resolve(Mode::Production, &ProjectLayout::for_root(dir.path())).unwrap_err();
    match err {
        ConfigError::EntryNotFound { path } => assert!(path.ends_with("src/index.js")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_template_is_fatal() {
    let dir = scaffold();
    fs::remove_file(dir.path().join("src/index.html")).unwrap();
    let err = resolve(Mode::Development, &ProjectLayout::for_root(dir.path())).unwrap_err();
    assert!(matches!(err, ConfigError::TemplateNotFound { .. }));
}

#[test]
fn vendor_and_first_party_modules_split_into_groups() {
    let dir = scaffold();
    let config = resolve(Mode::Production, &ProjectLayout::for_root(dir.path())).unwrap();
    let split = &config.optimization.as_ref().unwrap().split_chunks;

    let vendor = dir.path().join("node_modules/vue-router/dist/vue-router.js");
    assert_eq!(split.group_for(&vendor).unwrap(), Some("vendor"));
    assert_eq!(split.group_for(Path::new("src/Demo.vue")).unwrap(), Some("main"));
}

#[test]
fn serialized_shape_matches_bundler_keys() {
    let dir = scaffold();
    let config = resolve(Mode::Development, &ProjectLayout::for_root(dir.path())).unwrap();
    let value = config.to_value().unwrap();

    assert_eq!(value["mode"], "development");
    assert_eq!(value["entry"]["index"], "./src/index.js");
    assert_eq!(value["devServer"]["hotReload"], true);
    assert_eq!(value["devtool"], "eval-source-map");
    assert_eq!(value["module"]["rules"][0]["use"][0]["loader"], "vue-style-loader");
    assert_eq!(value["resolve"]["extensions"][1], ".vue");
    assert!(value.get("optimization").is_none());
}

#[test]
fn serialized_config_reads_back() {
    let dir = scaffold();
    for mode in [Mode::Development, Mode::Production] {
        let config = resolve(mode, &ProjectLayout::for_root(dir.path())).unwrap();
        let restored = BuildConfiguration::from_value(config.to_value().unwrap()).unwrap();
        assert_eq!(restored, config);
    }
}

#[test]
fn from_value_rejects_unknown_mode() {
    let dir = scaffold();
    let config = resolve(Mode::Development, &ProjectLayout::for_root(dir.path())).unwrap();
    let mut value = config.to_value().unwrap();
    value["mode"] = "staging".into();

    let err = BuildConfiguration::from_value(value).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "configuration"));
}

#[test]
#[serial]
fn resolve_from_env_reads_node_env() {
    let resolver = BuildConfigResolver::with_validator(ProjectLayout::default(), SchemaValidator);
    assert_eq!(resolver.layout().dev_port, 3002);

    unsafe {
        std::env::set_var(MODE_ENV_VAR, "production");
    }
    let production = resolver.resolve_from_env();
    unsafe {
        std::env::set_var(MODE_ENV_VAR, "staging");
    }
    let fallback = resolver.resolve_from_env();
    unsafe {
        std::env::remove_var(MODE_ENV_VAR);
    }
    let unset = resolver.resolve_from_env();

    let production = production.unwrap();
    assert_eq!(production.mode, Mode::Production);
    assert!(production.optimization.is_some());
    assert_eq!(fallback.unwrap().mode, Mode::Development);
    assert_eq!(unset.unwrap().mode, Mode::Development);
}
