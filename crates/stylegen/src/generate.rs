//! Stylesheet rendering shared by `generate` and `watch`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, info};

use stylegen_core::{Config, DesignToken, StyleRegistry, button_style, use_button_style};

/// Output format for generated styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compiled CSS text
    #[default]
    Css,
    /// The uncompiled style tree as JSON
    Json,
}

/// Command-line overrides applied on top of the `[style]` config section.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub format: OutputFormat,
    pub prefix_cls: Option<String>,
    pub icon_prefix_cls: Option<String>,
    pub no_hash: bool,
    pub compact: bool,
}

/// Render the button stylesheet for a validated config.
pub fn render(config: &Config, options: &GenerateOptions) -> Result<String> {
    let prefix_cls = options
        .prefix_cls
        .as_deref()
        .unwrap_or(&config.style.prefix_cls);
    let icon_prefix_cls = options
        .icon_prefix_cls
        .as_deref()
        .unwrap_or(&config.style.icon_prefix_cls);
    let token = DesignToken::from_config(config);

    match options.format {
        OutputFormat::Css => {
            let registry = StyleRegistry::new(
                config.style.hashed && !options.no_hash,
                config.style.pretty && !options.compact,
            );
            let registered = use_button_style(&registry, prefix_cls, icon_prefix_cls, &token);
            if let Some(ref hash) = registered.hash_id {
                info!("Scoped rules with hash class .{}", hash);
            }
            Ok(registered.css)
        }
        OutputFormat::Json => {
            let styles = button_style(prefix_cls, icon_prefix_cls, &token);
            let json = if options.compact {
                serde_json::to_string(&styles)?
            } else {
                serde_json::to_string_pretty(&styles)?
            };
            Ok(json + "\n")
        }
    }
}

/// Write to `path`, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
