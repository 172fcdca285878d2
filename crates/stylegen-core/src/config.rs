//! Configuration types and parsing.
//!
//! The schema has three sections:
//! - `[style]`: class prefixes and output options
//! - `[theme]`: seed values the design token is derived from
//! - `[tokens]`: explicit overrides for individual design tokens
//!
//! User files are deep-merged over the embedded default config, so a file
//! only needs the keys it changes.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use toml::Table;

use crate::error::{Error, Result};
use crate::token::{DesignToken, ThemeMode, parse_hex_color};

/// Known valid values for theme.mode.
const VALID_THEME_MODES: &[&str] = &["light", "dark", "auto"];

/// Embedded default configuration TOML, compiled into the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Result of loading a configuration file.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path where config was found, if any.
    pub source: Option<PathBuf>,
    /// Whether defaults were used (no config file found).
    pub used_defaults: bool,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Class prefixes and output options.
    pub style: StyleConfig,

    /// Seed values for token derivation.
    pub theme: ThemeConfig,

    /// Explicit design token overrides.
    pub tokens: TokenOverrides,
}

impl Config {
    /// Load configuration from the embedded default TOML string.
    pub fn from_default_toml() -> Result<Self> {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, merging with embedded defaults.
    ///
    /// Returns an error if the file doesn't exist or can't be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::load_with_defaults(&content)
    }

    /// Load configuration from a TOML string, merging with embedded defaults.
    ///
    /// Both documents are parsed as tables and deep-merged (user values win)
    /// before deserializing.
    pub fn load_with_defaults(user_toml: &str) -> Result<Self> {
        let mut base: Table = toml::from_str(DEFAULT_CONFIG_TOML)?;
        let user: Table = toml::from_str(user_toml)?;

        deep_merge_toml(&mut base, user);

        let config: Config = base.try_into()?;
        Ok(config)
    }

    /// Find and load configuration using the XDG lookup chain.
    ///
    /// If `explicit_path` is `Some`, that path is used directly and an error
    /// is returned if it doesn't exist or can't be parsed (no fallback).
    ///
    /// Otherwise searches, in order:
    /// 1. `$XDG_CONFIG_HOME/stylegen/config.toml`
    /// 2. `~/.config/stylegen/config.toml`
    /// 3. `./stylegen.toml`
    ///
    /// A file that exists but fails to load is an error. Only when no file
    /// exists at all is the embedded default used.
    pub fn find_and_load(explicit_path: Option<&Path>) -> Result<ConfigLoadResult> {
        if let Some(path) = explicit_path {
            let config = Self::load(path)?;
            return Ok(ConfigLoadResult {
                config,
                source: Some(path.to_path_buf()),
                used_defaults: false,
            });
        }

        let search_paths = Self::config_search_paths();

        for path in &search_paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => {
                    return Ok(ConfigLoadResult {
                        config,
                        source: Some(path.clone()),
                        used_defaults: false,
                    });
                }
                Err(e) => {
                    tracing::error!("Config file {:?} exists but failed to load: {}", path, e);
                    return Err(e);
                }
            }
        }

        tracing::info!("No config file found, using built-in default config");
        tracing::debug!(
            "Searched: {}",
            search_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ConfigLoadResult {
            config: Self::from_default_toml()?,
            source: None,
            used_defaults: true,
        })
    }

    /// Get the list of paths to search for config files.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("stylegen/config.toml"));
        }

        if let Ok(home) = env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/stylegen/config.toml"));
        }

        paths.push(PathBuf::from("stylegen.toml"));

        paths
    }

    /// Validate the configuration, returning every invalid value at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("style.prefix_cls", &self.style.prefix_cls),
            ("style.icon_prefix_cls", &self.style.icon_prefix_cls),
        ] {
            if !is_valid_class_name(value) {
                errors.push(format!(
                    "{}: invalid value '{}', expected a CSS class name like 'ant-btn'",
                    field, value
                ));
            }
        }

        if !VALID_THEME_MODES.contains(&self.theme.mode.as_str()) {
            errors.push(format!(
                "theme.mode: invalid value '{}', expected one of: {}",
                self.theme.mode,
                VALID_THEME_MODES.join(", ")
            ));
        }

        if !is_hex_color(&self.theme.primary_color) {
            errors.push(format!(
                "theme.primary_color: invalid value '{}', expected a hex color like '#1890ff'",
                self.theme.primary_color
            ));
        }

        if let Some(ref bg) = self.theme.background_color
            && !is_hex_color(bg)
        {
            errors.push(format!(
                "theme.background_color: invalid value '{}', expected a hex color like '#ffffff'",
                bg
            ));
        }

        for (field, value) in [
            ("theme.control_height", self.theme.control_height),
            ("theme.font_size", self.theme.font_size),
            ("theme.line_height", self.theme.line_height),
        ] {
            if !value.is_finite() {
                errors.push(format!("{}: must be a finite number", field));
            } else if value <= 0.0 {
                errors.push(format!("{}: must be greater than 0", field));
            }
        }

        if !self.theme.border_radius.is_finite() {
            errors.push("theme.border_radius: must be a finite number".to_string());
        } else if self.theme.border_radius < 0.0 {
            errors.push("theme.border_radius: must not be negative".to_string());
        }

        errors.extend(self.tokens.validate());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigValidation(errors))
        }
    }

    /// Check for potential configuration issues and return warnings.
    ///
    /// Unlike `validate()`, these are non-fatal: the stylesheet still
    /// generates, but probably not the way it was intended.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let token = DesignToken::from_config(self);

        for (name, height, font_size) in [
            ("small", token.height_sm, token.font_size),
            ("base", token.height, token.font_size),
            ("large", token.height_lg, token.font_size_lg),
        ] {
            let line_box = font_size * token.line_height;
            if height < line_box {
                warnings.push(format!(
                    "{} buttons: height {}px is below the text line box ({}px); text will overflow",
                    name, height, line_box
                ));
            }
        }

        if self.tokens.primary_color.is_some() && self.tokens.link_color.is_none() {
            warnings.push(
                "tokens.primary_color: overridden without tokens.link_color; \
                 links keep the theme.primary_color seed (set theme.primary_color instead?)"
                    .to_string(),
            );
        }

        if ThemeMode::parse(&self.theme.mode) == Some(ThemeMode::Auto)
            && self.theme.background_color.is_none()
        {
            warnings.push(
                "theme.mode: 'auto' has no theme.background_color to inspect; using light palette"
                    .to_string(),
            );
        }

        warnings
    }

    /// Human-readable summary of the configuration.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Style:".to_string());
        lines.push(format!("  prefix_cls: {}", self.style.prefix_cls));
        lines.push(format!("  icon_prefix_cls: {}", self.style.icon_prefix_cls));
        lines.push(format!("  hashed: {}", self.style.hashed));
        lines.push(format!("  pretty: {}", self.style.pretty));

        lines.push("\nTheme:".to_string());
        lines.push(format!("  mode: {}", self.theme.mode));
        lines.push(format!("  primary_color: {}", self.theme.primary_color));
        lines.push(format!("  control_height: {}px", self.theme.control_height));
        lines.push(format!("  font_size: {}px", self.theme.font_size));
        lines.push(format!("  line_height: {}", self.theme.line_height));
        lines.push(format!("  border_radius: {}px", self.theme.border_radius));
        if let Some(ref color) = self.theme.background_color {
            lines.push(format!("  background_color: {}", color));
        }

        let overrides = self.tokens.set_fields();
        if overrides.is_empty() {
            lines.push("\nTokens: no overrides".to_string());
        } else {
            lines.push(format!("\nTokens: {} override(s)", overrides.len()));
            for name in overrides {
                lines.push(format!("  - {}", name));
            }
        }

        lines.join("\n")
    }
}

/// Deep merge two TOML tables, with `overlay` values taking precedence.
///
/// For nested tables, recursively merges. For arrays and other values,
/// the overlay value completely replaces the base value.
fn deep_merge_toml(base: &mut Table, overlay: Table) {
    for (key, overlay_value) in overlay {
        match (base.get_mut(&key), overlay_value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge_toml(base_table, overlay_table);
            }
            (_, overlay_value) => {
                base.insert(key, overlay_value);
            }
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.starts_with('#') && {
        let hex = value.trim_start_matches('#');
        (hex.len() == 3 || hex.len() == 6) && parse_hex_color(value).is_some()
    }
}

/// Token overrides that end up as CSS colors.
const COLOR_FIELDS: [&str; 5] = [
    "primary_color",
    "component_background",
    "text_color",
    "border_color",
    "link_color",
];

/// Hex, or one of the rgb/hsl functional notations with a closed argument list.
fn is_css_color(value: &str) -> bool {
    let value = value.trim();
    if is_hex_color(value) {
        return true;
    }
    let Some((func, rest)) = value.split_once('(') else {
        return false;
    };
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };
    matches!(func, "rgb" | "rgba" | "hsl" | "hsla")
        && !args.trim().is_empty()
        && args
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ' ' | '%' | '/' | '-'))
}

/// A class name usable unescaped in a selector.
fn is_valid_class_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '-' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Class prefixes and output options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Class prefix of the button (`ant-btn`).
    pub prefix_cls: String,

    /// Class prefix of icons rendered inside buttons (`anticon`).
    pub icon_prefix_cls: String,

    /// Scope rules with a hash class derived from the token.
    pub hashed: bool,

    /// One declaration per line.
    pub pretty: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            prefix_cls: "ant-btn".to_string(),
            icon_prefix_cls: "anticon".to_string(),
            hashed: true,
            pretty: true,
        }
    }
}

/// Seed values for token derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Palette mode: "light", "dark", "auto".
    /// - "auto": dark when `background_color` is a dark color, light otherwise
    pub mode: String,

    /// Primary color (hex). Also the link color unless overridden.
    pub primary_color: String,

    /// Base control height in pixels.
    pub control_height: f64,

    /// Base font size in pixels.
    pub font_size: f64,

    /// Unitless line height.
    pub line_height: f64,

    /// Border radius in pixels.
    pub border_radius: f64,

    /// Component background override (hex).
    pub background_color: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "light".to_string(),
            primary_color: "#1890ff".to_string(),
            control_height: 32.0,
            font_size: 14.0,
            line_height: 1.5715,
            border_radius: 2.0,
            background_color: None,
        }
    }
}

/// Explicit design token overrides. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease_in_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_sm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_lg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_xs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_xs: Option<f64>,
}

impl TokenOverrides {
    fn numeric_fields(&self) -> [(&'static str, Option<f64>); 11] {
        [
            ("border_width", self.border_width),
            ("border_radius", self.border_radius),
            ("height", self.height),
            ("height_sm", self.height_sm),
            ("height_lg", self.height_lg),
            ("font_size", self.font_size),
            ("font_size_lg", self.font_size_lg),
            ("line_height", self.line_height),
            ("padding", self.padding),
            ("padding_xs", self.padding_xs),
            ("margin_xs", self.margin_xs),
        ]
    }

    fn text_fields(&self) -> [(&'static str, Option<&String>); 7] {
        [
            ("border_style", self.border_style.as_ref()),
            ("ease_in_out", self.ease_in_out.as_ref()),
            ("primary_color", self.primary_color.as_ref()),
            ("component_background", self.component_background.as_ref()),
            ("text_color", self.text_color.as_ref()),
            ("border_color", self.border_color.as_ref()),
            ("link_color", self.link_color.as_ref()),
        ]
    }

    /// Names of the overrides that are set.
    pub fn set_fields(&self) -> Vec<&'static str> {
        let numeric = self
            .numeric_fields()
            .into_iter()
            .filter(|(_, v)| v.is_some())
            .map(|(name, _)| name);
        let text = self
            .text_fields()
            .into_iter()
            .filter(|(_, v)| v.is_some())
            .map(|(name, _)| name);
        numeric.chain(text).collect()
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in self.numeric_fields() {
            let Some(value) = value else { continue };
            let must_be_positive = matches!(
                name,
                "height" | "height_sm" | "height_lg" | "font_size" | "font_size_lg" | "line_height"
            );
            if !value.is_finite() {
                errors.push(format!("tokens.{}: must be a finite number", name));
            } else if must_be_positive && value <= 0.0 {
                errors.push(format!("tokens.{}: must be greater than 0", name));
            } else if value < 0.0 {
                errors.push(format!("tokens.{}: must not be negative", name));
            }
        }

        for (name, value) in self.text_fields() {
            let Some(value) = value else { continue };
            if value.trim().is_empty() {
                errors.push(format!("tokens.{}: must not be empty", name));
            } else if COLOR_FIELDS.contains(&name) && !is_css_color(value) {
                errors.push(format!(
                    "tokens.{}: invalid color '{}', expected hex or rgb()/rgba()/hsl()/hsla()",
                    name, value
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style.prefix_cls, "ant-btn");
        assert_eq!(config.style.icon_prefix_cls, "anticon");
        assert!(config.style.hashed);
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.theme.control_height, 32.0);
        assert!(config.tokens.set_fields().is_empty());
    }

    #[test]
    fn test_embedded_default_config_parses_and_validates() {
        let config = Config::from_default_toml().expect("embedded default config should parse");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_embedded_default_matches_struct_defaults() {
        let from_toml = Config::from_default_toml().expect("embedded default config should parse");
        assert_eq!(from_toml, Config::default());
    }

    #[test]
    fn test_parse_minimal_toml() {
        // Direct TOML parsing (without merge) uses struct defaults
        let toml = r#"
            [theme]
            control_height = 40.0
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.control_height, 40.0);
        assert_eq!(config.theme.font_size, 14.0);
        assert_eq!(config.style.prefix_cls, "ant-btn");
    }

    #[test]
    fn test_load_with_defaults_nested_override() {
        let user_toml = r#"
            [theme]
            mode = "dark"

            [tokens]
            padding_xs = 6.0
        "#;

        let config = Config::load_with_defaults(user_toml).unwrap();

        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.tokens.padding_xs, Some(6.0));
        // Siblings of the overridden key come from the defaults.
        assert_eq!(config.theme.primary_color, "#1890ff");
        assert_eq!(config.style.icon_prefix_cls, "anticon");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let user_toml = r##"
            [theme]
            accent = "#ff0000"
        "##;
        assert!(matches!(
            Config::load_with_defaults(user_toml),
            Err(Error::TomlParse(_))
        ));
    }

    #[test]
    fn test_deep_merge_replaces_scalars_and_merges_tables() {
        let mut base: Table = toml::from_str("[a]\nx = 1\ny = 2\n[b]\nz = [1, 2]").unwrap();
        let overlay: Table = toml::from_str("[a]\ny = 3\n[b]\nz = [9]").unwrap();
        deep_merge_toml(&mut base, overlay);

        let a = base["a"].as_table().unwrap();
        assert_eq!(a["x"].as_integer(), Some(1));
        assert_eq!(a["y"].as_integer(), Some(3));
        assert_eq!(base["b"]["z"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = Config::default();
        config.style.prefix_cls = "9btn".to_string();
        config.theme.mode = "gtk".to_string();
        config.theme.primary_color = "blue".to_string();
        config.theme.control_height = 0.0;
        config.theme.border_radius = -1.0;
        config.tokens.height_sm = Some(-4.0);
        config.tokens.margin_xs = Some(-1.0);
        config.tokens.border_style = Some("  ".to_string());

        match config.validate() {
            Err(Error::ConfigValidation(errors)) => {
                assert_eq!(errors.len(), 8, "{:#?}", errors);
                assert!(errors.iter().any(|e| e.starts_with("style.prefix_cls")));
                assert!(errors.iter().any(|e| e.starts_with("theme.mode")));
                assert!(errors.iter().any(|e| e.starts_with("theme.primary_color")));
                assert!(errors.iter().any(|e| e.starts_with("theme.control_height")));
                assert!(errors.iter().any(|e| e.starts_with("theme.border_radius")));
                assert!(errors.iter().any(|e| e.contains("tokens.height_sm: must be greater")));
                assert!(errors.iter().any(|e| e.contains("tokens.margin_xs: must not be negative")));
                assert!(errors.iter().any(|e| e.starts_with("tokens.border_style")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan_seed() {
        let mut config = Config::default();
        config.theme.line_height = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_class_name_rules() {
        assert!(is_valid_class_name("ant-btn"));
        assert!(is_valid_class_name("_x1"));
        assert!(!is_valid_class_name(""));
        assert!(!is_valid_class_name("1btn"));
        assert!(!is_valid_class_name("ant btn"));
        assert!(!is_valid_class_name(".ant-btn"));
    }

    #[test]
    fn test_hex_color_rules() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#1890ff"));
        assert!(!is_hex_color("1890ff"));
        assert!(!is_hex_color("#1890f"));
        assert!(!is_hex_color("#ggg"));
    }

    #[test]
    fn test_css_color_rules() {
        assert!(is_css_color("#333"));
        assert!(is_css_color("rgba(0, 0, 0, 0.85)"));
        assert!(is_css_color("hsl(210, 100%, 55%)"));
        assert!(!is_css_color("bleu"));
        assert!(!is_css_color("rgba(0, 0, 0"));
        assert!(!is_css_color("url(x)"));
        assert!(!is_css_color("rgb(1;}"));
    }

    #[test]
    fn test_non_finite_theme_numbers_rejected() {
        let config =
            Config::load_with_defaults("[theme]\ncontrol_height = inf\nborder_radius = nan\n")
                .unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("theme.control_height: must be a finite number"), "{}", msg);
        assert!(msg.contains("theme.border_radius: must be a finite number"), "{}", msg);

        let mut config = Config::default();
        config.theme.font_size = f64::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_overrides_must_be_colors() {
        let mut config = Config::default();
        config.tokens.link_color = Some("bleu".to_string());
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("tokens.link_color: invalid color 'bleu'"), "{}", msg);

        config.tokens.link_color = Some("rgba(114, 46, 209, 0.9)".to_string());
        config.tokens.border_style = Some("dashed".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warnings_for_collapsed_padding() {
        let mut config = Config::default();
        config.tokens.height_sm = Some(20.0);
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("small buttons"));
    }

    #[test]
    fn test_warnings_for_primary_override_without_link() {
        let mut config = Config::default();
        config.tokens.primary_color = Some("#ff0000".to_string());
        assert!(config.warnings().iter().any(|w| w.contains("link_color")));

        config.tokens.link_color = Some("#ff0000".to_string());
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_warnings_for_auto_without_background() {
        let mut config = Config::default();
        config.theme.mode = "auto".to_string();
        assert!(config.warnings().iter().any(|w| w.starts_with("theme.mode")));
    }

    #[test]
    fn test_default_config_has_no_warnings() {
        assert!(Config::default().warnings().is_empty());
    }

    #[test]
    fn test_summary_lists_overrides() {
        let mut config = Config::default();
        assert!(config.summary().contains("Tokens: no overrides"));

        config.tokens.padding = Some(12.0);
        config.tokens.text_color = Some("#333".to_string());
        let summary = config.summary();
        assert!(summary.contains("Tokens: 2 override(s)"));
        assert!(summary.contains("  - padding"));
        assert!(summary.contains("  - text_color"));
    }
}
