//! Push button.

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::widgets::item_box::ItemBox;
use crate::widget::{EventContext, Key, KeyEvent, Widget, WidgetBase};

/// A clickable text button.
///
/// The button fires its update callback when the left button is released
/// over it, when Enter or Space is pressed while it has focus, and on
/// [`click`](Self::click).
pub struct Button {
    base: WidgetBase,
    face: ItemBox<String>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::interactive(),
            face: ItemBox::new(BoxKind::Click, text.into()),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.face.item()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.face.set_item(text.into());
        if let Some(size) = self.base.theme().map(|theme| self.natural_size(theme)) {
            self.resize(size);
        }
    }

    /// Fire the update callback as if the button had been clicked.
    pub fn click(&mut self) {
        self.base.mark_updated();
    }

    /// Width fits the text plus border and padding, but never goes below
    /// the theme's minimum widget width.
    pub fn natural_size(&self, theme: &Theme) -> Size {
        let fitted = self.face.fitted_size(theme);
        Size::new(
            fitted.width.max(theme.min_widget_width()),
            theme.box_height(),
        )
    }

    fn resize(&mut self, size: Size) {
        self.base.set_size(size);
        self.face.set_rect(Rect::from_origin_size(Point::ZERO, size));
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        self.resize(self.natural_size(theme));
    }

    fn on_resized(&mut self, size: Size) {
        self.face.set_rect(Rect::from_origin_size(Point::ZERO, size));
    }

    fn on_activation_changed(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _old: ActivationState,
        new: ActivationState,
    ) {
        self.face.set_state(new);
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        if self.base.contains_local(pos) {
            self.click();
        }
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        if matches!(key.key, Key::Enter | Key::Space) {
            self.click();
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        if let Some(theme) = self.base.theme() {
            self.face.draw(ctx, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_never_below_minimum() {
        let theme = Theme::default();
        assert_eq!(Button::new("A").natural_size(&theme), Size::new(86.0, 19.0));

        let long = Button::new("A rather long caption");
        let expected = theme.text_width("A rather long caption") + 4.0;
        assert_eq!(long.natural_size(&theme).width, expected);
    }

    #[test]
    fn test_click_marks_updated() {
        let mut button = Button::new("OK");
        button.click();
        assert!(button.widget_base_mut().take_updated());
    }
}
