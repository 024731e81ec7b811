//! Human-readable summary of a resolved configuration.

use owo_colors::OwoColorize;
use vbuild_config::{BuildConfiguration, PluginDescriptor};

use super::colors_enabled;

/// Render the summary lines without printing them.
pub(crate) fn summary_lines(config: &BuildConfiguration) -> Vec<String> {
    let mut lines = vec![
        format!("mode      {}", config.mode),
        format!("output    {}", config.output.path.join(&config.output.filename).display()),
    ];

    for (name, path) in &config.entry {
        lines.push(format!("entry     {} → {}", name, path.display()));
    }

    let plugins: Vec<&str> = config.plugins.iter().map(plugin_label).collect();
    lines.push(format!("plugins   {}", plugins.join(", ")));

    if let Some(server) = &config.dev_server {
        lines.push(format!("server    {} (hot reload: {})", server.address(), server.hot_reload));
    }

    if let Some(optimization) = &config.optimization {
        let groups: Vec<&str> = optimization
            .split_chunks
            .cache_groups
            .values()
            .map(|g| g.name.as_str())
            .collect();
        lines.push(format!(
            "chunks    {} + {}",
            groups.join(", "),
            optimization.runtime_chunk.name
        ));
    }

    lines
}

/// Print a short summary of `config` to stderr.
pub fn print_config_summary(config: &BuildConfiguration) {
    let title = "Resolved configuration";
    if colors_enabled() {
        eprintln!("\n{}", title.bold());
    } else {
        eprintln!("\n{}", title);
    }

    for line in summary_lines(config) {
        if colors_enabled() {
            eprintln!("  {}", line.dimmed());
        } else {
            eprintln!("  {}", line);
        }
    }
}

fn plugin_label(plugin: &PluginDescriptor) -> &'static str {
    match plugin {
        PluginDescriptor::ComponentLoader => "component-loader",
        PluginDescriptor::DocumentTemplate(_) => "document-template",
        PluginDescriptor::Clean(_) => "clean",
        PluginDescriptor::StyleExtraction(_) => "style-extraction",
        PluginDescriptor::HotModuleReplacement => "hmr",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vbuild_config::{BuildConfigResolver, Mode, ProjectLayout, SchemaValidator};

    fn resolved(mode: Mode) -> BuildConfiguration {
        BuildConfigResolver::with_validator(ProjectLayout::for_root("/app"), SchemaValidator)
            .resolve(mode)
            .unwrap()
    }

    #[test]
    fn development_summary_mentions_server() {
        let lines = summary_lines(&resolved(Mode::Development));
        assert!(lines.iter().any(|l| l.contains("http://localhost:3002")));
        assert!(lines.iter().any(|l| l.ends_with("component-loader, document-template, hmr")));
        assert!(!lines.iter().any(|l| l.starts_with("chunks")));
    }

    #[test]
    fn production_summary_lists_chunk_groups() {
        let lines = summary_lines(&resolved(Mode::Production));
        assert!(lines.contains(&"chunks    vendor, main + runtime".to_string()));
        assert!(lines.iter().any(|l| l.contains("javascript/[name].[contenthash:5].js")));
    }
}
