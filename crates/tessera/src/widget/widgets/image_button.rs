//! Push button drawn from an image.

use tessera_core::ActivationState;
use tessera_render::{Color, Image, Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::{EventContext, Key, KeyEvent, Widget, WidgetBase};

/// Number of frames stacked vertically in an image button's image.
const FRAMES: f32 = 3.0;

/// A push button whose face is a frame of a host image.
///
/// The image holds three frames of equal height, top to bottom: resting,
/// hovered, and focused or pressed. A disabled button shows the resting
/// frame faded. The caption, if any, is centered on the face and shifts
/// down by one pixel while the button is held.
///
/// Like [`Button`](super::Button), it fires its update callback on a
/// release over it, on Enter or Space, and on [`click`](Self::click).
pub struct ImageButton {
    base: WidgetBase,
    image: Image,
    text: String,
    fixed_size: Option<Size>,
    held: bool,
}

impl ImageButton {
    pub fn new(image: Image, text: impl Into<String>) -> Self {
        let mut button = Self {
            base: WidgetBase::interactive(),
            image,
            text: text.into(),
            fixed_size: None,
            held: false,
        };
        button.fit();
        button
    }

    /// Scale the face to `size` instead of the frame size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.fixed_size = Some(Size::new(width, height));
        self.fit();
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the image. The button goes back to the new frame size.
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
        self.fixed_size = None;
        self.fit();
    }

    /// Size of one frame of the image.
    pub fn frame_size(&self) -> Size {
        let size = self.image.size();
        Size::new(size.width, size.height / FRAMES)
    }

    /// Which frame to show in `state`.
    pub fn frame_index(state: ActivationState) -> usize {
        match state {
            ActivationState::Default | ActivationState::Disabled => 0,
            ActivationState::Hovered => 1,
            ActivationState::Focused | ActivationState::Pressed => 2,
        }
    }

    /// Whether the button is held down by the pointer or a key.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Fire the update callback as if the button had been clicked.
    pub fn click(&mut self) {
        self.base.mark_updated();
    }

    fn fit(&mut self) {
        let size = self.fixed_size.unwrap_or_else(|| self.frame_size());
        self.base.set_size(size);
    }

    fn source_rect(&self) -> Rect {
        let frame = self.frame_size();
        let index = Self::frame_index(self.base.state()) as f32;
        Rect::from_origin_size(Point::new(0.0, frame.height * index), frame)
    }
}

impl Widget for ImageButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, _theme: &Theme) {
        self.fit();
    }

    fn on_activation_changed(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _old: ActivationState,
        new: ActivationState,
    ) {
        if new == ActivationState::Disabled {
            self.held = false;
        }
    }

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {
        self.held = true;
    }

    fn on_mouse_moved(&mut self, ctx: &mut EventContext<'_>, pos: Point) {
        if ctx.has_capture() {
            self.held = self.base.contains_local(pos);
        }
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        self.held = false;
        if self.base.contains_local(pos) {
            self.click();
        }
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        if matches!(key.key, Key::Enter | Key::Space) {
            self.held = true;
            self.click();
        }
    }

    fn on_key_released(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        if matches!(key.key, Key::Enter | Key::Space) {
            self.held = false;
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let rect = self.base.rect();
        let tint = if self.base.is_enabled() {
            Color::WHITE
        } else {
            Color::WHITE.with_alpha(0.5)
        };
        ctx.draw_image_rect(&self.image, self.source_rect(), rect, tint);

        let Some(theme) = self.base.theme() else {
            return;
        };
        if self.text.is_empty() {
            return;
        }
        let color = theme.palette(BoxKind::Click, self.base.state()).text;
        let shift = if self.held { 1.0 } else { 0.0 };
        let origin = Point::new(
            ((rect.width() - theme.text_width(&self.text)) / 2.0).round(),
            ((rect.height() - theme.line_spacing()) / 2.0).round() + shift,
        );
        ctx.draw_text(origin, &self.text, theme.text_size(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_render::{DrawCommand, ImageId, RecordingSink};

    fn strip() -> Image {
        Image::new(ImageId::new(3), Size::new(40.0, 60.0))
    }

    fn drawn_source(button: &ImageButton) -> Rect {
        let mut sink = RecordingSink::new();
        button.draw(&mut RenderContext::new(&mut sink));
        match sink.commands().first() {
            Some(DrawCommand::Image { src, .. }) => *src,
            other => panic!("expected an image, got {other:?}"),
        }
    }

    #[test]
    fn test_size_is_one_frame() {
        let button = ImageButton::new(strip(), "");
        assert_eq!(button.widget_base().size(), Size::new(40.0, 20.0));

        let scaled = ImageButton::new(strip(), "").with_size(80.0, 40.0);
        assert_eq!(scaled.widget_base().size(), Size::new(80.0, 40.0));
        assert_eq!(drawn_source(&scaled), Rect::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn test_state_picks_frame() {
        let mut button = ImageButton::new(strip(), "Go");
        button.widget_base_mut().set_state(ActivationState::Hovered);
        assert_eq!(drawn_source(&button), Rect::new(0.0, 20.0, 40.0, 20.0));

        button.widget_base_mut().set_state(ActivationState::Pressed);
        assert_eq!(drawn_source(&button), Rect::new(0.0, 40.0, 40.0, 20.0));

        button.widget_base_mut().set_state(ActivationState::Disabled);
        assert_eq!(drawn_source(&button), Rect::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn test_click_marks_updated() {
        let mut button = ImageButton::new(strip(), "Go");
        button.click();
        assert!(button.widget_base_mut().take_updated());
    }
}
