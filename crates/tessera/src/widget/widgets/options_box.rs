//! A value picker cycling through labelled options.

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::{BoxKind, Theme};

use crate::widget::widgets::item_box::{Arrow, ItemBox};
use crate::widget::{EventContext, Key, KeyEvent, Widget, WidgetBase};

struct Item<T> {
    label: String,
    value: T,
}

/// Shows one of a list of labelled values, with arrows to step through
/// them.
///
/// Changes made through `set_*` are silent. Changes made through `select_*`
/// count as user input and fire the update callback, as do arrow clicks,
/// the wheel and the arrow/Home/End/PageUp/PageDown keys. Stepping past
/// either end wraps around.
pub struct OptionsBox<T> {
    base: WidgetBase,
    items: Vec<Item<T>>,
    current: usize,
    label: ItemBox<String>,
    left: ItemBox<Arrow>,
    right: ItemBox<Arrow>,
}

impl<T> OptionsBox<T> {
    pub fn new() -> Self {
        Self {
            base: WidgetBase::interactive(),
            items: Vec::new(),
            current: 0,
            label: ItemBox::new(BoxKind::Input, String::new()),
            left: ItemBox::new(BoxKind::Click, Arrow::Left),
            right: ItemBox::new(BoxKind::Click, Arrow::Right),
        }
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_item(mut self, label: impl Into<String>, value: T) -> Self {
        self.add(label, value);
        self
    }

    /// Append an option. The current selection does not change, except that
    /// the first option added becomes current.
    pub fn add(&mut self, label: impl Into<String>, value: T) {
        self.items.push(Item {
            label: label.into(),
            value,
        });
        self.show_current();
        self.fit();
    }

    /// Replace the value of the option labelled `label`. Returns false if
    /// there is none.
    pub fn assign(&mut self, label: &str, value: T) -> bool {
        match self.items.iter_mut().find(|item| item.label == label) {
            Some(item) => {
                item.value = value;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    // =========================================================================
    // Current option
    // =========================================================================

    pub fn current_index(&self) -> Option<usize> {
        (self.current < self.items.len()).then_some(self.current)
    }

    pub fn current_label(&self) -> Option<&str> {
        self.items.get(self.current).map(|item| item.label.as_str())
    }

    pub fn value(&self) -> Option<&T> {
        self.items.get(self.current).map(|item| &item.value)
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.current).map(|item| &mut item.value)
    }

    /// Make option `index` current. Out-of-range indices are ignored.
    /// Returns true if the selection changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current {
            return false;
        }
        self.current = index;
        self.show_current();
        true
    }

    /// Make the option labelled `label` current.
    pub fn set_label(&mut self, label: &str) -> bool {
        match self.items.iter().position(|item| item.label == label) {
            Some(index) => self.set_index(index),
            None => false,
        }
    }

    /// Make the first option holding `value` current.
    pub fn set_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|item| item.value == *value) {
            Some(index) => self.set_index(index),
            None => false,
        }
    }

    /// Like [`set_index`](Self::set_index), firing the update callback on a
    /// change.
    pub fn select_index(&mut self, index: usize) -> bool {
        let changed = self.set_index(index);
        if changed {
            self.base.mark_updated();
        }
        changed
    }

    pub fn select_label(&mut self, label: &str) -> bool {
        let changed = self.set_label(label);
        if changed {
            self.base.mark_updated();
        }
        changed
    }

    pub fn select_next(&mut self) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        self.select_index((self.current + 1) % len)
    }

    pub fn select_previous(&mut self) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        self.select_index((self.current + len - 1) % len)
    }

    pub fn select_first(&mut self) -> bool {
        self.select_index(0)
    }

    pub fn select_last(&mut self) -> bool {
        match self.items.len() {
            0 => false,
            len => self.select_index(len - 1),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn show_current(&mut self) {
        if let Some(item) = self.items.get(self.current) {
            self.label.set_item(item.label.clone());
        }
    }

    /// Wide enough for the widest label plus both arrows, never below the
    /// theme's minimum width.
    pub fn natural_size(&self, theme: &Theme) -> Size {
        let arrows = 2.0 * theme.box_height() + 2.0 * theme.padding();
        let width = self
            .items
            .iter()
            .map(|item| theme.text_width(&item.label) + arrows)
            .fold(theme.min_widget_width(), f32::max);
        Size::new(width, theme.box_height())
    }

    fn fit(&mut self) {
        if let Some(size) = self.base.theme().map(|theme| self.natural_size(theme)) {
            self.base.set_size(size);
            self.place_boxes(size);
        }
    }

    fn place_boxes(&mut self, size: Size) {
        let side = size.height;
        self.label.set_rect(Rect::from_origin_size(Point::ZERO, size));
        self.left.set_rect(Rect::new(0.0, 0.0, side, side));
        self.right
            .set_rect(Rect::new((size.width - side).max(0.0), 0.0, side, side));
    }

    fn resting(&self) -> ActivationState {
        if self.base.has_focus() {
            ActivationState::Focused
        } else {
            ActivationState::Default
        }
    }

    /// Hover or press feedback on the arrow under `pos`.
    fn track_arrows(&mut self, pos: Point) {
        let pressed = self.base.state() == ActivationState::Pressed;
        let resting = self.resting();
        for arrow in [&mut self.left, &mut self.right] {
            let state = if !arrow.contains(pos) {
                resting
            } else if pressed {
                ActivationState::Pressed
            } else {
                ActivationState::Hovered
            };
            arrow.set_state(state);
        }
    }
}

impl<T> Default for OptionsBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Widget for OptionsBox<T> {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn on_theme_changed(&mut self, theme: &Theme) {
        let size = self.natural_size(theme);
        self.base.set_size(size);
        self.place_boxes(size);
    }

    fn on_activation_changed(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _old: ActivationState,
        new: ActivationState,
    ) {
        // Hover and press feedback is per arrow, from the pointer position.
        if matches!(
            new,
            ActivationState::Default | ActivationState::Focused | ActivationState::Disabled
        ) {
            self.label.set_state(new);
            self.left.set_state(new);
            self.right.set_state(new);
        }
    }

    fn on_mouse_moved(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        self.track_arrows(pos);
    }

    fn on_mouse_leave(&mut self, _ctx: &mut EventContext<'_>) {
        let resting = self.resting();
        self.left.set_state(resting);
        self.right.set_state(resting);
    }

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        if self.left.contains(pos) {
            self.left.set_state(ActivationState::Pressed);
        } else if self.right.contains(pos) {
            self.right.set_state(ActivationState::Pressed);
        }
    }

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, pos: Point) {
        if self.left.contains(pos) {
            self.left.set_state(ActivationState::Hovered);
            self.select_previous();
        } else if self.right.contains(pos) {
            self.right.set_state(ActivationState::Hovered);
            self.select_next();
        }
    }

    fn on_mouse_wheel_moved(&mut self, _ctx: &mut EventContext<'_>, delta: i32) {
        if delta < 0 {
            self.select_next();
        } else {
            self.select_previous();
        }
    }

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        match key.key {
            Key::ArrowLeft | Key::ArrowUp => {
                self.select_previous();
                self.left.set_state(ActivationState::Pressed);
            }
            Key::ArrowRight | Key::ArrowDown => {
                self.select_next();
                self.right.set_state(ActivationState::Pressed);
            }
            Key::Home | Key::PageUp => {
                self.select_first();
            }
            Key::End | Key::PageDown => {
                self.select_last();
            }
            _ => {}
        }
    }

    fn on_key_released(&mut self, _ctx: &mut EventContext<'_>, key: &KeyEvent) {
        let resting = self.resting();
        match key.key {
            Key::ArrowLeft | Key::ArrowUp => self.left.set_state(resting),
            Key::ArrowRight | Key::ArrowDown => self.right.set_state(resting),
            _ => {}
        }
    }

    fn draw(&self, ctx: &mut RenderContext<'_>) {
        let Some(theme) = self.base.theme() else {
            return;
        };
        self.label.draw(ctx, theme);
        self.left.draw(ctx, theme);
        self.right.draw(ctx, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::context::Environment;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Size3 {
        Small,
        Medium,
        Large,
    }

    fn sizes() -> OptionsBox<Size3> {
        OptionsBox::new()
            .with_item("Small", Size3::Small)
            .with_item("Medium", Size3::Medium)
            .with_item("Extra large size", Size3::Large)
    }

    #[test]
    fn test_first_added_is_current() {
        let empty = OptionsBox::<u8>::new();
        assert_eq!(empty.current_index(), None);
        assert_eq!(empty.value(), None);

        let options = sizes();
        assert_eq!(options.current_index(), Some(0));
        assert_eq!(options.current_label(), Some("Small"));
        assert_eq!(options.value(), Some(&Size3::Small));
    }

    #[test]
    fn test_width_fits_widest_label() {
        let theme = Theme::default();
        let options = sizes();
        // Two 19px arrow boxes plus 1px padding each side.
        let expected = theme.text_width("Extra large size") + 40.0;
        assert_eq!(options.natural_size(&theme), Size::new(expected, 19.0));

        let narrow = OptionsBox::new().with_item("S", ());
        assert_eq!(narrow.natural_size(&theme).width, 86.0);
    }

    #[test]
    fn test_set_is_silent_and_select_notifies() {
        let mut options = sizes();
        assert!(options.set_value(&Size3::Large));
        assert_eq!(options.current_label(), Some("Extra large size"));
        assert!(options.set_label("Medium"));
        assert!(!options.set_index(7));
        assert!(!options.widget_base_mut().take_updated());

        assert!(options.select_label("Small"));
        assert!(options.widget_base_mut().take_updated());
        assert!(!options.select_first());
        assert!(!options.widget_base_mut().take_updated());
    }

    #[test]
    fn test_stepping_wraps() {
        let mut options = sizes();
        options.select_previous();
        assert_eq!(options.current_index(), Some(2));
        options.select_next();
        assert_eq!(options.current_index(), Some(0));
        options.select_last();
        options.select_next();
        assert_eq!(options.current_index(), Some(0));
    }

    #[test]
    fn test_assign_replaces_value() {
        let mut options = sizes();
        assert!(options.assign("Small", Size3::Large));
        assert!(!options.assign("Huge", Size3::Large));
        assert_eq!(options.value(), Some(&Size3::Large));
    }

    #[test]
    fn test_keys_wheel_and_arrows() {
        let theme = Theme::default();
        let mut env = Environment::default();
        let mut ctx = EventContext::new(&mut env, true);
        let mut options = sizes();
        options.widget_base_mut().set_theme(theme.clone().shared());
        options.on_theme_changed(&theme);

        options.on_key_pressed(&mut ctx, &KeyEvent::plain(Key::End));
        assert_eq!(options.current_index(), Some(2));
        options.on_key_pressed(&mut ctx, &KeyEvent::plain(Key::ArrowDown));
        assert_eq!(options.current_index(), Some(0));
        options.on_mouse_wheel_moved(&mut ctx, 1);
        assert_eq!(options.current_index(), Some(2));
        options.on_mouse_wheel_moved(&mut ctx, -1);
        assert_eq!(options.current_index(), Some(0));

        let width = options.size().width;
        options.on_mouse_pressed(&mut ctx, Point::new(width - 5.0, 5.0));
        options.on_mouse_released(&mut ctx, Point::new(width - 5.0, 5.0));
        assert_eq!(options.current_label(), Some("Medium"));

        options.on_mouse_released(&mut ctx, Point::new(width / 2.0, 5.0));
        assert_eq!(options.current_label(), Some("Medium"));
        assert!(options.widget_base_mut().take_updated());
    }
}
