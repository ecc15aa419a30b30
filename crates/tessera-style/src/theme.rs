//! The applied, immutable theme.

use std::sync::Arc;
use std::time::Duration;

use tessera_core::ActivationState;
use tessera_render::Color;

use crate::config::{CursorStyle, ThemeConfig};
use crate::font::FontMetrics;
use crate::palette::{BoxKind, BoxStyle, StatePalette};

/// A theme shared between the GUI and every widget in it.
pub type SharedTheme = Arc<Theme>;

/// Read-only theme values used for sizing and painting widgets.
///
/// Themes are built by [`ThemeConfig::apply`]; `Theme::default()` is the
/// applied default configuration.
#[derive(Debug, Clone)]
pub struct Theme {
    config: ThemeConfig,
    font: FontMetrics,
    bg_color: Color,
    click: BoxStyle,
    input: BoxStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(ThemeConfig::default(), Color::WHITE)
    }
}

impl Theme {
    pub(crate) fn from_config(config: ThemeConfig, bg_color: Color) -> Self {
        Self {
            font: FontMetrics::new(config.text_size as f32),
            config,
            bg_color,
            click: BoxStyle::click(),
            input: BoxStyle::input(),
        }
    }

    /// Wrap the theme for sharing.
    pub fn shared(self) -> SharedTheme {
        Arc::new(self)
    }

    /// The configuration this theme was built from.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Font metrics for the base text size.
    #[inline]
    pub fn font(&self) -> &FontMetrics {
        &self.font
    }

    #[inline]
    pub fn text_size(&self) -> f32 {
        self.font.size()
    }

    /// Height of one line of text.
    #[inline]
    pub fn line_spacing(&self) -> f32 {
        self.font.line_spacing()
    }

    /// Width of `text` at the base text size.
    #[inline]
    pub fn text_width(&self, text: &str) -> f32 {
        self.font.text_width(text)
    }

    #[inline]
    pub fn border_size(&self) -> f32 {
        self.config.border_size
    }

    /// Spacing inside widgets.
    #[inline]
    pub fn padding(&self) -> f32 {
        self.config.padding
    }

    /// Spacing between widgets.
    #[inline]
    pub fn margin(&self) -> f32 {
        self.config.margin
    }

    #[inline]
    pub fn min_widget_width(&self) -> f32 {
        self.config.min_widget_width
    }

    /// Default height of a single-line widget box.
    pub fn box_height(&self) -> f32 {
        self.line_spacing() + 2.0 * self.border_size() + 2.0 * self.padding()
    }

    /// Offset from a box edge to its content.
    pub fn content_inset(&self) -> f32 {
        self.border_size() + self.padding()
    }

    #[inline]
    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    #[inline]
    pub fn clear_background(&self) -> bool {
        self.config.clear_background
    }

    pub fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.config.tooltip_delay_ms)
    }

    pub fn multi_tooltips(&self) -> bool {
        self.config.multi_tooltips
    }

    pub fn cursor_style(&self) -> CursorStyle {
        self.config.cursor_style
    }

    pub fn cursor_blink_period(&self) -> Duration {
        Duration::from_millis(self.config.cursor_blink_ms)
    }

    /// The style of a box family.
    pub fn style(&self, kind: BoxKind) -> &BoxStyle {
        match kind {
            BoxKind::Click => &self.click,
            BoxKind::Input => &self.input,
        }
    }

    /// Resolved colors of a box family in one state.
    pub fn palette(&self, kind: BoxKind, state: ActivationState) -> StatePalette {
        self.style(kind).palette(state)
    }

    /// Opacity of a text cursor at `elapsed` session time.
    ///
    /// Blinking cursors are fully visible for the first half of every period
    /// and hidden for the second. Pulsing cursors fade linearly out and back.
    pub fn cursor_opacity(&self, elapsed: Duration) -> f32 {
        let period = self.config.cursor_blink_ms.max(1) as f32;
        let phase = (elapsed.as_millis() as f32 % period) / period;
        match self.config.cursor_style {
            CursorStyle::Blink => {
                if phase < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            CursorStyle::Pulse => (1.0 - 2.0 * phase).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_height() {
        let theme = Theme::default();
        // line spacing 15 + 2 * border 1 + 2 * padding 1
        assert_eq!(theme.box_height(), 19.0);
        assert_eq!(theme.content_inset(), 2.0);
    }

    #[test]
    fn test_blink_phases() {
        let theme = Theme::default();
        assert_eq!(theme.cursor_opacity(Duration::from_millis(0)), 1.0);
        assert_eq!(theme.cursor_opacity(Duration::from_millis(499)), 1.0);
        assert_eq!(theme.cursor_opacity(Duration::from_millis(500)), 0.0);
        assert_eq!(theme.cursor_opacity(Duration::from_millis(1000)), 1.0);
    }

    #[test]
    fn test_pulse_fades() {
        let config = ThemeConfig {
            cursor_style: CursorStyle::Pulse,
            ..Default::default()
        };
        let theme = config.apply().unwrap();
        assert_eq!(theme.cursor_opacity(Duration::ZERO), 1.0);
        assert_eq!(theme.cursor_opacity(Duration::from_millis(500)), 0.0);
        assert!((theme.cursor_opacity(Duration::from_millis(250)) - 0.5).abs() < 1e-4);
    }
}
