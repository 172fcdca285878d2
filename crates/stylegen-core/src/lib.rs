//! stylegen-core: design tokens in, button stylesheet out.
//!
//! The crate is split the way the generation pipeline runs:
//! - [`config`] loads seed values from TOML
//! - [`token`] derives the full [`DesignToken`] from those seeds
//! - [`button`] maps (class prefix, token) to a nested [`Interpolation`]
//! - [`compile`] flattens the style tree into CSS text
//! - [`registry`] caches compiled output per component path and token

pub mod button;
pub mod compile;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod style;
pub mod token;

pub use button::{ButtonShape, ButtonSize, ButtonType, button_class_names, button_style};
pub use compile::{CompileOptions, compile};
pub use config::{Config, ConfigLoadResult};
pub use error::{Error, Result};
pub use registry::{RegisteredStyle, StyleRegistry, use_button_style};
pub use style::{CssValue, Interpolation, StyleEntry, StyleObject};
pub use token::{DesignToken, ThemeMode};
