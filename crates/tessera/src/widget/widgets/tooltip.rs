//! Hover tooltips.
//!
//! A [`Tooltip`] belongs to a widget's base. The router arms it when the
//! pointer enters the widget and disarms it on leave; the per-frame tick
//! shows it once it has been armed for the theme's tooltip delay. Visible
//! tooltips are drawn after the whole tree so they end up on top.

use std::time::Duration;

use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

/// Distance between the widget's bottom edge and the tooltip.
const VERTICAL_GAP: f32 = 2.0;

/// A delayed text popup attached to a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    text: String,
    armed_at: Option<Duration>,
    shown_at: Option<Duration>,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            armed_at: None,
            shown_at: None,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Start the delay at session time `now`.
    pub fn arm(&mut self, now: Duration) {
        self.armed_at = Some(now);
        self.shown_at = None;
    }

    /// Hide the tooltip and stop waiting.
    pub fn disarm(&mut self) {
        self.armed_at = None;
        self.shown_at = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Advance to session time `now`. Returns true if the tooltip is shown.
    pub fn update(&mut self, now: Duration, delay: Duration) -> bool {
        if self.shown_at.is_none()
            && let Some(armed_at) = self.armed_at
            && now.saturating_sub(armed_at) >= delay
        {
            self.shown_at = Some(now);
        }
        self.is_visible()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// The session time the tooltip appeared at, while it is shown.
    #[inline]
    pub fn shown_since(&self) -> Option<Duration> {
        self.shown_at
    }

    /// The tooltip's box size.
    pub fn size(&self, theme: &Theme) -> Size {
        let inset = 2.0 * theme.content_inset();
        Size::new(theme.text_width(&self.text) + inset, theme.box_height())
    }

    /// Draw below a widget of size `anchor`, in the widget's coordinates.
    pub fn draw(&self, ctx: &mut RenderContext<'_>, theme: &Theme, anchor: Size) {
        let style = theme.style(BoxKind::Input);
        let rect = Rect::from_origin_size(
            Point::new(0.0, anchor.height + VERTICAL_GAP),
            self.size(theme),
        );
        let inset = theme.content_inset();
        ctx.fill_rect(rect, style.fill);
        ctx.stroke_rect(rect, style.border, theme.border_size());
        ctx.draw_text(
            rect.top_left().offset(inset, inset),
            &self.text,
            theme.text_size(),
            style.text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_shows_after_delay() {
        let mut tip = Tooltip::new("Help");
        assert!(!tip.update(Duration::from_secs(10), DELAY));

        tip.arm(Duration::from_millis(100));
        assert!(!tip.update(Duration::from_millis(599), DELAY));
        assert!(tip.update(Duration::from_millis(600), DELAY));
        assert_eq!(tip.shown_since(), Some(Duration::from_millis(600)));
        assert!(tip.update(Duration::from_millis(900), DELAY));
        assert_eq!(tip.shown_since(), Some(Duration::from_millis(600)));
    }

    #[test]
    fn test_disarm_hides() {
        let mut tip = Tooltip::new("Help");
        tip.arm(Duration::ZERO);
        tip.update(DELAY, DELAY);
        assert!(tip.is_visible());
        tip.disarm();
        assert!(!tip.is_visible());
        assert!(!tip.update(Duration::from_secs(5), DELAY));
    }
}
