//! Static text.

use tessera_render::{Color, Point, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::{Widget, WidgetBase};

/// A non-interactive line of text.
///
/// The label sizes itself to its text plus the theme padding on each side;
/// changing the text resizes it and re-lays out its container.
pub struct Label {
    base: WidgetBase,
    text: String,
    /// Overrides the theme's text color.
    color: Option<Color>,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            color: None,
        }
    }

    /// Draw the text in `color` instead of the theme's.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.fit();
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// The size the label takes under `theme`.
    pub fn natural_size(&self, theme: &Theme) -> Size {
        let pad = 2.0 * theme.padding();
        Size::new(
            theme.text_width(&self.text) + pad,
            theme.line_spacing() + pad,
        )
    }

    fn fit(&mut self) {
        if let Some(size) = self.base.theme().map(|theme| self.natural_size(theme)) {
            self.base.set_size(size);
        }
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        self.base.set_size(self.natural_size(theme));
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        let color = self
            .color
            .unwrap_or_else(|| theme.palette(BoxKind::Click, self.base.state()).text);
        let pad = theme.padding();
        ctx.draw_text(Point::new(pad, pad), &self.text, theme.text_size(), color);
    }
}
