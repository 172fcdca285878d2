//! Design tokens.
//!
//! `DesignToken` is the single set of values every style generator reads.
//! It is derived from a handful of seed values in config (primary color,
//! control height, font metrics, mode), then explicit `[tokens]` overrides
//! are applied on top.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Config;
use crate::config::{ThemeConfig, TokenOverrides};

// Size scaling factors for the small and large control variants.
const HEIGHT_SM_SCALE: f64 = 0.75;
const HEIGHT_LG_SCALE: f64 = 1.25;
const FONT_SIZE_LG_STEP: f64 = 2.0;

// Stock light palette
const DEFAULT_PRIMARY: &str = "#1890ff";
const LIGHT_BACKGROUND: &str = "#ffffff";
const LIGHT_BORDER: &str = "#d9d9d9";
const DARK_BACKGROUND: &str = "#141414";
const DARK_BORDER: &str = "#434343";

// Text opacity on either background
const TEXT_OPACITY: f64 = 0.85;

const DEFAULT_EASE_IN_OUT: &str = "all 0.3s cubic-bezier(0.645, 0.045, 0.355, 1)";

/// Light or dark palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Pick from the luminance of the configured background.
    Auto,
}

impl ThemeMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

/// Parse a hex color string to RGB tuple. Returns None if invalid.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim().trim_start_matches('#');

    // Expand shorthand (e.g., "fff" -> "ffffff")
    let color = if color.len() == 3 {
        color.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        color.to_string()
    };

    if color.len() != 6 || !color.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&color[0..2], 16).ok()?;
    let g = u8::from_str_radix(&color[2..4], 16).ok()?;
    let b = u8::from_str_radix(&color[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Calculate relative luminance per WCAG formula (0.0 = black, 1.0 = white).
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c_srgb = c as f64 / 255.0;
        if c_srgb <= 0.03928 {
            c_srgb / 12.92
        } else {
            ((c_srgb + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Return true if the color is considered dark (low luminance).
///
/// Unparseable colors count as light, matching the light default palette.
pub fn is_dark_color(color: &str) -> bool {
    match parse_hex_color(color) {
        Some((r, g, b)) => relative_luminance(r, g, b) < 0.179,
        None => false,
    }
}

/// Convert RGB tuple to hex color string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format an RGBA color string.
pub fn rgba_str(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({}, {}, {}, {:.2})", r, g, b, a)
}

/// Normalize hex colors to lowercase `#rrggbb`; anything else passes through.
fn normalize_color(color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) if color.trim().starts_with('#') => rgb_to_hex(r, g, b),
        _ => color.trim().to_string(),
    }
}

/// The derivative token consumed by style generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignToken {
    // Border
    pub border_width: f64,
    pub border_style: String,
    pub border_radius: f64,

    // Motion
    pub ease_in_out: String,

    // Control heights
    pub height: f64,
    pub height_sm: f64,
    pub height_lg: f64,

    // Typography
    pub font_size: f64,
    pub font_size_lg: f64,
    pub line_height: f64,

    // Colors
    pub primary_color: String,
    pub component_background: String,
    pub text_color: String,
    pub border_color: String,
    pub link_color: String,

    // Spacing
    pub padding: f64,
    pub padding_xs: f64,
    pub margin_xs: f64,
}

impl Default for DesignToken {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_style: "solid".to_string(),
            border_radius: 2.0,
            ease_in_out: DEFAULT_EASE_IN_OUT.to_string(),
            height: 32.0,
            height_sm: 24.0,
            height_lg: 40.0,
            font_size: 14.0,
            font_size_lg: 16.0,
            line_height: 1.5715,
            primary_color: DEFAULT_PRIMARY.to_string(),
            component_background: LIGHT_BACKGROUND.to_string(),
            text_color: rgba_str(0, 0, 0, TEXT_OPACITY),
            border_color: LIGHT_BORDER.to_string(),
            link_color: DEFAULT_PRIMARY.to_string(),
            padding: 16.0,
            padding_xs: 8.0,
            margin_xs: 8.0,
        }
    }
}

impl DesignToken {
    /// Derive a token from configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut token = Self::default();
        token.apply_seed(&config.theme);
        token.apply_overrides(&config.tokens);
        tracing::debug!(
            height = token.height,
            font_size = token.font_size,
            primary = %token.primary_color,
            "derived design token"
        );
        token
    }

    /// Resolve the palette mode for a theme config.
    pub fn resolve_mode(theme: &ThemeConfig) -> ThemeMode {
        match ThemeMode::parse(&theme.mode) {
            Some(ThemeMode::Auto) | None => match theme.background_color.as_deref() {
                Some(bg) if is_dark_color(bg) => ThemeMode::Dark,
                _ => ThemeMode::Light,
            },
            Some(mode) => mode,
        }
    }

    fn apply_seed(&mut self, theme: &ThemeConfig) {
        let primary = normalize_color(&theme.primary_color);
        self.primary_color = primary.clone();
        self.link_color = primary;

        self.height = theme.control_height;
        self.height_sm = (theme.control_height * HEIGHT_SM_SCALE).round();
        self.height_lg = (theme.control_height * HEIGHT_LG_SCALE).round();

        self.font_size = theme.font_size;
        self.font_size_lg = theme.font_size + FONT_SIZE_LG_STEP;
        self.line_height = theme.line_height;
        self.border_radius = theme.border_radius;

        match Self::resolve_mode(theme) {
            ThemeMode::Dark => {
                self.component_background = DARK_BACKGROUND.to_string();
                self.text_color = rgba_str(255, 255, 255, TEXT_OPACITY);
                self.border_color = DARK_BORDER.to_string();
            }
            _ => {
                self.component_background = LIGHT_BACKGROUND.to_string();
                self.text_color = rgba_str(0, 0, 0, TEXT_OPACITY);
                self.border_color = LIGHT_BORDER.to_string();
            }
        }

        // An explicit background replaces the mode default.
        if let Some(ref bg) = theme.background_color {
            self.component_background = normalize_color(bg);
        }
    }

    fn apply_overrides(&mut self, o: &TokenOverrides) {
        fn take<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        take(&mut self.border_width, &o.border_width);
        take(&mut self.border_style, &o.border_style);
        take(&mut self.border_radius, &o.border_radius);
        take(&mut self.ease_in_out, &o.ease_in_out);
        take(&mut self.height, &o.height);
        take(&mut self.height_sm, &o.height_sm);
        take(&mut self.height_lg, &o.height_lg);
        take(&mut self.font_size, &o.font_size);
        take(&mut self.font_size_lg, &o.font_size_lg);
        take(&mut self.line_height, &o.line_height);
        take(&mut self.primary_color, &o.primary_color);
        take(&mut self.component_background, &o.component_background);
        take(&mut self.text_color, &o.text_color);
        take(&mut self.border_color, &o.border_color);
        take(&mut self.link_color, &o.link_color);
        take(&mut self.padding, &o.padding);
        take(&mut self.padding_xs, &o.padding_xs);
        take(&mut self.margin_xs, &o.margin_xs);
    }

    /// Copy with a different control height.
    pub fn with_height(&self, height: f64) -> Self {
        Self {
            height,
            ..self.clone()
        }
    }

    /// Copy with a different horizontal padding.
    pub fn with_padding(&self, padding: f64) -> Self {
        Self {
            padding,
            ..self.clone()
        }
    }

    /// Copy with a different font size.
    pub fn with_font_size(&self, font_size: f64) -> Self {
        Self {
            font_size,
            ..self.clone()
        }
    }

    /// Height of one line of text in pixels.
    pub fn line_box(&self) -> f64 {
        self.font_size * self.line_height
    }

    /// Stable SHA-256 hex digest of every token value.
    pub fn fingerprint(&self) -> String {
        let canonical = format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.border_width,
            self.border_style,
            self.border_radius,
            self.ease_in_out,
            self.height,
            self.height_sm,
            self.height_lg,
            self.font_size,
            self.font_size_lg,
            self.line_height,
            self.primary_color,
            self.component_background,
            self.text_color,
            self.border_color,
            self.link_color,
            self.padding,
            self.padding_xs,
            self.margin_xs,
        );

        let digest = Sha256::digest(canonical.as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
