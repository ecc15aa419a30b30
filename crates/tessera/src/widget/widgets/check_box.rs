//! Two-state check box.

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::widgets::item_box::{CheckMark, ItemBox};
use crate::widget::{EventContext, Key, KeyEvent, Widget, WidgetBase};

/// A square that is either checked or not.
///
/// User toggles (a release inside the box, or Space while focused) fire the
/// update callback; [`set_checked`](Self::set_checked) does not.
pub struct CheckBox {
    base: WidgetBase,
    face: ItemBox<CheckMark>,
}

impl CheckBox {
    pub fn new(checked: bool) -> Self {
        Self {
            base: WidgetBase::interactive(),
            face: ItemBox::new(BoxKind::Input, CheckMark(checked)),
        }
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.face.item().0
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.face.set_item(CheckMark(checked));
    }

    /// Flip the state and fire the update callback.
    pub fn toggle(&mut self) {
        let checked = !self.is_checked();
        self.set_checked(checked);
        self.base.mark_updated();
    }
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Widget for CheckBox {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        let side = theme.box_height();
        self.base.set_size(Size::new(side, side));
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
            self.toggle();
        }
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        if key.key == Key::Space {
            self.toggle();
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        if let Some(theme) = self.base.theme() {
            self.face.draw(ctx, theme);
        }
    }
}
