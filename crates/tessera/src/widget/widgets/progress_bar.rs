//! Non-interactive progress indicator.

use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::{Widget, WidgetBase};

/// Where a progress bar shows its percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPlacement {
    #[default]
    Hidden,
    /// Centred over the bar.
    Over,
    /// To the right of the bar.
    Beside,
}

/// A horizontal bar filled to a percentage.
pub struct ProgressBar {
    base: WidgetBase,
    length: f32,
    value: f32,
    label: LabelPlacement,
}

impl ProgressBar {
    /// Create an empty bar `length` pixels long.
    pub fn new(length: f32) -> Self {
        Self {
            base: WidgetBase::new(),
            length,
            value: 0.0,
            label: LabelPlacement::Hidden,
        }
    }

    pub fn with_label(mut self, placement: LabelPlacement) -> Self {
        self.label = placement;
        self
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the percentage, clamped to `0..=100`.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 100.0);
    }

    pub fn label_placement(&self) -> LabelPlacement {
        self.label
    }

    pub fn set_label_placement(&mut self, placement: LabelPlacement) {
        self.label = placement;
        if let Some(size) = self.base.theme().map(|theme| self.natural_size(theme)) {
            self.base.set_size(size);
        }
    }

    /// The percentage as shown in the label.
    pub fn label_text(&self) -> String {
        format!("{}%", self.value.round() as u32)
    }

    pub fn natural_size(&self, theme: &Theme) -> Size {
        let mut width = self.length;
        if self.label == LabelPlacement::Beside {
            width += theme.margin() + theme.text_width("100%");
        }
        Size::new(width, theme.box_height())
    }

    fn bar_rect(&self, theme: &Theme) -> Rect {
        Rect::new(0.0, 0.0, self.length, theme.box_height())
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl Widget for ProgressBar {
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
        let style = theme.style(BoxKind::Input);
        let palette = theme.palette(BoxKind::Input, self.base.state());
        let bar = self.bar_rect(theme);
        ctx.fill_rect(bar, palette.fill);

        let inner = bar.deflate(theme.content_inset());
        let filled = inner.width() * self.value / 100.0;
        if filled > 0.0 {
            ctx.fill_rect(
                Rect::new(inner.left(), inner.top(), filled, inner.height()),
                style.selection,
            );
        }
        ctx.stroke_rect(bar, palette.border, theme.border_size());

        let text = self.label_text();
        let inset = theme.content_inset();
        match self.label {
            LabelPlacement::Hidden => {}
            LabelPlacement::Over => {
                let x = (bar.width() - theme.text_width(&text)) / 2.0;
                ctx.draw_text(Point::new(x, inset), &text, theme.text_size(), palette.text);
            }
            LabelPlacement::Beside => {
                let x = bar.right() + theme.margin();
                ctx.draw_text(Point::new(x, inset), &text, theme.text_size(), palette.text);
            }
        }
    }
}
