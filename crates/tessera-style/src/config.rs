//! Theme configuration.
//!
//! A [`ThemeConfig`] is the serializable description of a theme. It is
//! validated and turned into an immutable [`Theme`] by
//! [`ThemeConfig::apply`].
//!
//! ```
//! use tessera_style::ThemeConfig;
//!
//! let config = ThemeConfig::from_toml_str(r##"
//!     text_size = 16
//!     bg_color = "#e6e8e0"
//! "##).unwrap();
//! let theme = config.apply().unwrap();
//! assert_eq!(theme.text_size(), 16.0);
//! assert_eq!(theme.margin(), 4.0); // unset fields keep their defaults
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_render::Color;

use crate::error::{Error, Result};
use crate::theme::Theme;

/// How a text cursor is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    /// Hard on/off blinking.
    #[default]
    Blink,
    /// Smooth fading in and out.
    Pulse,
}

/// Serializable theme description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Display name of the theme.
    pub name: Option<String>,
    /// Directory that asset file names are resolved against.
    pub base_path: PathBuf,
    /// Widget texture sheet, relative to `base_path`.
    pub texture_file: Option<String>,
    /// Font file, relative to `base_path`.
    pub font_file: Option<String>,
    /// Base text size in pixels.
    pub text_size: u32,
    /// Window background color, `#RRGGBB` or `#RRGGBBAA`.
    pub bg_color: String,
    /// Whether the background is cleared every frame.
    pub clear_background: bool,
    /// Border thickness of widget boxes.
    pub border_size: f32,
    /// Spacing inside widgets.
    pub padding: f32,
    /// Spacing between widgets.
    pub margin: f32,
    /// Minimum width of buttons and similar boxes.
    pub min_widget_width: f32,
    /// How long the pointer must rest on a widget before its tooltip shows.
    pub tooltip_delay_ms: u64,
    /// Whether several tooltips may be visible at once.
    pub multi_tooltips: bool,
    /// Text cursor animation.
    pub cursor_style: CursorStyle,
    /// Period of one cursor blink cycle.
    pub cursor_blink_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: None,
            base_path: PathBuf::from("asset/"),
            texture_file: None,
            font_file: None,
            text_size: 12,
            bg_color: "#FFFFFF".to_owned(),
            clear_background: true,
            border_size: 1.0,
            padding: 1.0,
            margin: 4.0,
            min_widget_width: 86.0,
            tooltip_delay_ms: 500,
            multi_tooltips: false,
            cursor_style: CursorStyle::Blink,
            cursor_blink_ms: 1000,
        }
    }
}

impl ThemeConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The resolved path of an asset file.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.base_path.join(file)
    }

    /// Validate the configuration and build a theme from it.
    pub fn apply(&self) -> Result<Theme> {
        if self.text_size < 2 {
            return Err(Error::InvalidTextSize(self.text_size));
        }

        for (property, value) in [
            ("border_size", self.border_size),
            ("padding", self.padding),
            ("margin", self.margin),
            ("min_widget_width", self.min_widget_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_value(
                    property,
                    format!("{value} is not a non-negative length"),
                ));
            }
        }

        let bg_color = Color::from_hex(&self.bg_color).ok_or_else(|| {
            Error::invalid_value("bg_color", format!("'{}' is not a hex color", self.bg_color))
        })?;

        for file in [&self.texture_file, &self.font_file].into_iter().flatten() {
            let path = self.asset_path(file);
            if !path.is_file() {
                return Err(Error::missing_asset(path));
            }
        }

        tracing::debug!(
            target: "tessera::theme",
            name = self.name.as_deref().unwrap_or("<unnamed>"),
            text_size = self.text_size,
            "theme configuration applied"
        );
        Ok(Theme::from_config(self.clone(), bg_color))
    }
}
