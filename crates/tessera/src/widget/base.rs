//! Widget base implementation.
//!
//! [`WidgetBase`] holds the state every widget shares: geometry, capability
//! flags, activation state, the attached theme and an optional tooltip.
//! Widget implementations embed it as a field and hand it out through
//! [`Widget::widget_base`](super::Widget::widget_base).
//!
//! ```ignore
//! struct Swatch {
//!     base: WidgetBase,
//!     color: Color,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn draw(&self, ctx: &mut RenderContext<'_>) {
//!         ctx.fill_rect(self.base.rect(), self.color);
//!     }
//! }
//! ```

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, Size};
use tessera_style::{SharedTheme, Theme};

use super::widgets::Tooltip;

/// The base implementation for all widgets.
#[derive(Debug)]
pub struct WidgetBase {
    /// Position relative to the parent, and size.
    geometry: Rect,

    visible: bool,

    /// Can hold keyboard focus and take part in tab order.
    focusable: bool,

    /// Reacts to mouse presses (and captures the pointer on press).
    selectable: bool,

    /// Holds keyboard focus right now.
    focused: bool,

    state: ActivationState,

    /// Set when the widget is attached to a tree and on every theme change.
    theme: Option<SharedTheme>,

    tooltip: Option<Tooltip>,

    /// A value change is waiting to be reported to the update callback.
    updated: bool,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a visible, enabled base that takes no input.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            focusable: false,
            selectable: false,
            focused: false,
            state: ActivationState::Default,
            theme: None,
            tooltip: None,
            updated: false,
        }
    }

    /// Create a base for an interactive widget: focusable and selectable.
    pub fn interactive() -> Self {
        Self {
            focusable: true,
            selectable: true,
            ..Self::new()
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Position and size, relative to the parent.
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Position relative to the parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the position. Returns true if it changed.
    pub fn set_pos(&mut self, pos: Point) -> bool {
        if self.geometry.origin == pos {
            return false;
        }
        self.geometry.origin = pos;
        true
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the size. Returns true if it changed.
    pub fn set_size(&mut self, size: Size) -> bool {
        if self.geometry.size == size {
            return false;
        }
        self.geometry.size = size;
        true
    }

    /// The widget's rectangle in its own coordinates (origin at 0, 0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.geometry.size)
    }

    /// Check if a point in local coordinates is inside the widget.
    #[inline]
    pub fn contains_local(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // Flags
    // =========================================================================

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }

    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    #[inline]
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Whether the widget currently holds keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // =========================================================================
    // Activation state
    // =========================================================================

    #[inline]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: ActivationState) {
        self.state = state;
    }

    /// A widget is enabled unless it is in the Disabled state.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.state.is_disabled()
    }

    /// Whether the widget can hold keyboard focus right now. Selectable
    /// widgets take focus when clicked.
    pub fn accepts_focus(&self) -> bool {
        self.visible && (self.focusable || self.selectable) && self.is_enabled()
    }

    /// Whether tab navigation stops at this widget.
    pub fn in_tab_order(&self) -> bool {
        self.visible && self.focusable && self.is_enabled()
    }

    // =========================================================================
    // Theme
    // =========================================================================

    /// The theme, once the widget is part of a tree.
    #[inline]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_deref()
    }

    pub(crate) fn set_theme(&mut self, theme: SharedTheme) {
        self.theme = Some(theme);
    }

    // =========================================================================
    // Tooltip
    // =========================================================================

    /// Attach a tooltip, replacing any previous one.
    pub fn set_tooltip(&mut self, text: impl Into<String>) {
        self.tooltip = Some(Tooltip::new(text));
    }

    /// Remove the tooltip.
    pub fn clear_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub(crate) fn tooltip_mut(&mut self) -> Option<&mut Tooltip> {
        self.tooltip.as_mut()
    }

    // =========================================================================
    // Update notification
    // =========================================================================

    /// Report that the widget's value changed. The tree runs the widget's
    /// update callback once the current hook or mutation returns.
    pub fn mark_updated(&mut self) {
        self.updated = true;
    }

    pub(crate) fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_base_defaults() {
        let base = WidgetBase::new();
        assert!(base.is_visible());
        assert!(base.is_enabled());
        assert!(!base.is_focusable());
        assert!(!base.is_selectable());
        assert_eq!(base.state(), ActivationState::Default);
        assert!(base.theme().is_none());
    }

    #[test]
    fn test_setters_report_change() {
        let mut base = WidgetBase::new();
        assert!(base.set_size(Size::new(10.0, 5.0)));
        assert!(!base.set_size(Size::new(10.0, 5.0)));
        assert!(base.set_pos(Point::new(3.0, 4.0)));
        assert!(!base.set_pos(Point::new(3.0, 4.0)));
        assert_eq!(base.geometry(), Rect::new(3.0, 4.0, 10.0, 5.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn test_contains_local_ignores_position() {
        let mut base = WidgetBase::new();
        base.set_pos(Point::new(100.0, 100.0));
        base.set_size(Size::new(10.0, 10.0));
        assert!(base.contains_local(Point::new(5.0, 5.0)));
        assert!(!base.contains_local(Point::new(105.0, 105.0)));
    }

    #[test]
    fn test_updated_flag_is_taken_once() {
        let mut base = WidgetBase::new();
        assert!(!base.take_updated());
        base.mark_updated();
        assert!(base.take_updated());
        assert!(!base.take_updated());
    }

    #[test]
    fn test_disabled_widget_refuses_focus() {
        let mut base = WidgetBase::interactive();
        assert!(base.accepts_focus());
        base.set_state(ActivationState::Disabled);
        assert!(!base.is_enabled());
        assert!(!base.accepts_focus());
    }

    #[test]
    fn test_selectable_widget_is_skipped_by_tab() {
        let mut base = WidgetBase::new();
        base.set_selectable(true);
        assert!(base.accepts_focus());
        assert!(!base.in_tab_order());
    }
}
