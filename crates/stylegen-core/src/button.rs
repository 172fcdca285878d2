//! Button style generation.
//!
//! Maps a class prefix, an icon class prefix and a [`DesignToken`] to the
//! style tree for every button variant:
//! - type: default, primary, dashed, text, link
//! - shape: circle, round
//! - size: small, middle (base), large
//! - icon-only and loading states
//!
//! Size variants reuse the same type/shape generators with a patched token
//! and a size class appended to every selector (`.ant-btn-primary.ant-btn-sm`).

use crate::style::{Interpolation, StyleObject};
use crate::token::DesignToken;

const DEFAULT_SHADOW: &str = "0 2px 0 rgba(0, 0, 0, 0.015)";
const PRIMARY_SHADOW: &str = "0 2px 0 rgba(0, 0, 0, 0.045)";

// 14px icon glyphs scaled to 16px in icon-only buttons
const ICON_ONLY_SCALE: &str = "scale(1.143)";

/// Visual type of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Default,
    Primary,
    Dashed,
    Text,
    Link,
}

impl ButtonType {
    pub const ALL: [ButtonType; 5] = [
        ButtonType::Default,
        ButtonType::Primary,
        ButtonType::Dashed,
        ButtonType::Text,
        ButtonType::Link,
    ];

    /// Class suffix, `None` for the default type (it uses the bare prefix).
    pub fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Primary => Some("primary"),
            Self::Dashed => Some("dashed"),
            Self::Text => Some("text"),
            Self::Link => Some("link"),
        }
    }
}

/// Outline shape of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonShape {
    #[default]
    Default,
    Circle,
    Round,
}

impl ButtonShape {
    pub fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Circle => Some("circle"),
            Self::Round => Some("round"),
        }
    }
}

/// Control size of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Middle,
    Large,
}

impl ButtonSize {
    pub fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::Small => Some("sm"),
            Self::Middle => None,
            Self::Large => Some("lg"),
        }
    }

    /// Token with this size's overrides applied.
    pub fn patch_token(self, token: &DesignToken) -> DesignToken {
        match self {
            Self::Small => token.with_height(token.height_sm).with_padding(token.padding_xs),
            Self::Middle => token.clone(),
            Self::Large => token.with_height(token.height_lg).with_font_size(token.font_size_lg),
        }
    }
}

/// Class list a renderer attaches so markup matches the generated selectors.
pub fn button_class_names(
    prefix_cls: &str,
    button_type: ButtonType,
    shape: ButtonShape,
    size: ButtonSize,
    loading: bool,
    icon_only: bool,
) -> Vec<String> {
    let mut classes = vec![prefix_cls.to_string()];

    let suffixes = [
        button_type.class_suffix(),
        shape.class_suffix(),
        size.class_suffix(),
        icon_only.then_some("icon-only"),
        loading.then_some("loading"),
    ];
    classes.extend(
        suffixes
            .into_iter()
            .flatten()
            .map(|suffix| format!("{}-{}", prefix_cls, suffix)),
    );

    classes
}

// ============================== Type ==============================

/// Declarations every button type starts from.
pub fn shared_button_style(token: &DesignToken) -> StyleObject {
    StyleObject::new()
        .with("position", "relative")
        .with("display", "inline-block")
        .with("fontWeight", 400.0)
        .with("whiteSpace", "nowrap")
        .with("textAlign", "center")
        .with("backgroundImage", "none")
        .with(
            "border",
            format!(
                "{}px {} transparent",
                crate::style::format_number(token.border_width),
                token.border_style
            ),
        )
        .with("cursor", "pointer")
        .with("transition", token.ease_in_out.as_str())
        .with("userSelect", "none")
        .with("touchAction", "manipulation")
        .with_nested("> span", StyleObject::new().with("display", "inline-block"))
}

/// Vertical padding that centers one line of text in the control height.
///
/// Never negative: a line box taller than the control collapses it to 0.
pub fn vertical_padding(token: &DesignToken) -> f64 {
    ((token.height - token.line_box()) / 2.0 - token.border_width).max(0.0)
}

/// Horizontal padding inside the border.
pub fn horizontal_padding(token: &DesignToken) -> f64 {
    token.padding - token.border_width
}

/// Filled button body: shared declarations plus sizing and primary colors.
pub fn solid_button_style(token: &DesignToken) -> StyleObject {
    let padding = format!(
        "{}px {}px",
        crate::style::format_number(vertical_padding(token)),
        crate::style::format_number(horizontal_padding(token))
    );

    shared_button_style(token).spread(
        StyleObject::new()
            .with("lineHeight", token.line_height)
            .with("borderRadius", token.border_radius)
            .with("backgroundColor", token.primary_color.as_str())
            .with("color", "#FFF")
            .with("fontSize", token.font_size)
            .with("height", token.height)
            .with("padding", padding),
    )
}

pub fn default_button_style(
    prefix_cls: &str,
    icon_prefix_cls: &str,
    patch_cls: &str,
    token: &DesignToken,
) -> StyleObject {
    let body = solid_button_style(token).spread(
        StyleObject::new()
            .with("backgroundColor", token.component_background.as_str())
            .with("color", token.text_color.as_str())
            .with("borderColor", token.border_color.as_str())
            .with("boxShadow", DEFAULT_SHADOW)
            // Leave a space between icon and text.
            .with_nested(
                format!(
                    "> .{icon} + span, > span + .{icon}",
                    icon = icon_prefix_cls
                ),
                StyleObject::new().with("marginInlineStart", token.margin_xs),
            ),
    );

    StyleObject::new().with_nested(format!(".{}{}", prefix_cls, patch_cls), body)
}

pub fn primary_button_style(prefix_cls: &str, patch_cls: &str, token: &DesignToken) -> StyleObject {
    let body = solid_button_style(token).spread(
        StyleObject::new()
            .with("boxShadow", PRIMARY_SHADOW)
            .with("borderColor", token.primary_color.as_str()),
    );

    StyleObject::new().with_nested(format!(".{}-primary{}", prefix_cls, patch_cls), body)
}

pub fn dashed_button_style(prefix_cls: &str, patch_cls: &str) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-dashed{}", prefix_cls, patch_cls),
        StyleObject::new().with("borderStyle", "dashed"),
    )
}

pub fn text_button_style(prefix_cls: &str, patch_cls: &str) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-text{}", prefix_cls, patch_cls),
        StyleObject::new().with("borderColor", "transparent"),
    )
}

pub fn link_button_style(prefix_cls: &str, patch_cls: &str, token: &DesignToken) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-link{}", prefix_cls, patch_cls),
        StyleObject::new()
            .with("borderColor", "transparent")
            .with("color", token.link_color.as_str()),
    )
}

// ============================== Shape ==============================

pub fn circle_button_style(prefix_cls: &str, patch_cls: &str, token: &DesignToken) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-circle{}", prefix_cls, patch_cls),
        StyleObject::new()
            .with("minWidth", token.height)
            .with("paddingLeft", 0.0)
            .with("paddingRight", 0.0)
            .with("borderRadius", "50%"),
    )
}

pub fn round_button_style(prefix_cls: &str, patch_cls: &str, token: &DesignToken) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-round{}", prefix_cls, patch_cls),
        StyleObject::new().with_nested(
            format!("&, &.{}-icon-only", prefix_cls),
            StyleObject::new()
                .with("borderRadius", token.height)
                .with("paddingLeft", token.height / 2.0)
                .with("paddingRight", token.height / 2.0)
                .with("width", "auto"),
        ),
    )
}

// ============================== MISC ==============================

pub fn icon_only_button_style(
    prefix_cls: &str,
    patch_cls: &str,
    token: &DesignToken,
) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-icon-only{}", prefix_cls, patch_cls),
        StyleObject::new()
            .with("width", token.height)
            .with("paddingLeft", 0.0)
            .with("paddingRight", 0.0)
            .with_nested("> span", StyleObject::new().with("transform", ICON_ONLY_SCALE)),
    )
}

pub fn loading_button_style(
    prefix_cls: &str,
    icon_prefix_cls: &str,
    token: &DesignToken,
) -> StyleObject {
    StyleObject::new().with_nested(
        format!(".{}-loading", prefix_cls),
        StyleObject::new().with_nested(
            format!("&-icon > .{}", icon_prefix_cls),
            StyleObject::new().with("marginInlineEnd", token.margin_xs),
        ),
    )
}

// ============================== Size ==============================

/// Every type, shape and icon-only rule for one size.
///
/// An empty `size_prefix_cls` means the base size: selectors get no patch.
pub fn size_button_style(
    prefix_cls: &str,
    icon_prefix_cls: &str,
    size_prefix_cls: &str,
    token: &DesignToken,
) -> Interpolation {
    let patch_cls = if size_prefix_cls.is_empty() {
        String::new()
    } else {
        format!(".{}", size_prefix_cls)
    };
    let patch = patch_cls.as_str();

    [
        // Type
        default_button_style(prefix_cls, icon_prefix_cls, patch, token),
        primary_button_style(prefix_cls, patch, token),
        dashed_button_style(prefix_cls, patch),
        text_button_style(prefix_cls, patch),
        link_button_style(prefix_cls, patch, token),
        // Shape
        circle_button_style(prefix_cls, patch, token),
        round_button_style(prefix_cls, patch, token),
        // MISC
        icon_only_button_style(prefix_cls, patch, token),
    ]
    .into_iter()
    .collect()
}

/// Rules for one [`ButtonSize`], with the size's token patch applied.
pub fn sized_button_style(
    prefix_cls: &str,
    icon_prefix_cls: &str,
    size: ButtonSize,
    token: &DesignToken,
) -> Interpolation {
    let size_prefix_cls = size
        .class_suffix()
        .map(|suffix| format!("{}-{}", prefix_cls, suffix))
        .unwrap_or_default();

    size_button_style(
        prefix_cls,
        icon_prefix_cls,
        &size_prefix_cls,
        &size.patch_token(token),
    )
}

/// The complete button stylesheet: small, base and large sizes, then loading.
pub fn button_style(prefix_cls: &str, icon_prefix_cls: &str, token: &DesignToken) -> Interpolation {
    let mut styles = Interpolation::new();

    for size in [ButtonSize::Small, ButtonSize::Middle, ButtonSize::Large] {
        styles.extend(sized_button_style(prefix_cls, icon_prefix_cls, size, token));
    }
    styles.push(loading_button_style(prefix_cls, icon_prefix_cls, token));

    tracing::debug!(
        prefix = prefix_cls,
        rules = styles.len(),
        "generated button style"
    );
    styles
}
