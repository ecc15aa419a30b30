//! Core widget trait definitions.
//!
//! Every UI element implements [`Widget`]. The trait has two required
//! accessors for the embedded [`WidgetBase`] plus [`Widget::draw`]; every
//! input and lifecycle hook has an empty default, so widgets override only
//! what they react to.
//!
//! Widgets live in a [`WidgetTree`](super::WidgetTree) arena and are only
//! ever touched from the GUI thread, so the trait is neither
//! `Send` nor `Sync`.

use std::any::Any;

use tessera_core::ActivationState;
use tessera_render::{Point, Rect, RenderContext, Size};
use tessera_style::Theme;

use super::base::WidgetBase;
use super::context::EventContext;
use super::events::KeyEvent;
use super::layout::Layout;

/// The base trait for all UI elements.
pub trait Widget: Any {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Draw the widget in its local coordinates.
    ///
    /// The context is already translated to the widget's origin. Children
    /// are drawn by the tree afterwards, on top.
    fn draw(&self, ctx: &mut RenderContext<'_>);

    /// The layout policy for the widget's children. Leaf widgets have none.
    fn layout(&self) -> Option<&dyn Layout> {
        None
    }

    /// Short type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    // =========================================================================
    // Lifecycle hooks
    // =========================================================================

    /// The theme changed, or the widget was attached to a tree.
    ///
    /// Widgets that size themselves from text or theme metrics recompute
    /// their size here.
    fn on_theme_changed(&mut self, _theme: &Theme) {}

    /// The widget's size changed.
    fn on_resized(&mut self, _size: Size) {}

    /// Called once per frame, before drawing.
    fn on_tick(&mut self, _ctx: &mut EventContext<'_>) {}

    /// The activation state changed from `old` to `new`.
    fn on_activation_changed(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _old: ActivationState,
        _new: ActivationState,
    ) {
    }

    // =========================================================================
    // Input hooks (positions are widget-local)
    // =========================================================================

    fn on_mouse_enter(&mut self, _ctx: &mut EventContext<'_>) {}

    fn on_mouse_leave(&mut self, _ctx: &mut EventContext<'_>) {}

    fn on_mouse_moved(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {}

    fn on_mouse_pressed(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {}

    fn on_mouse_released(&mut self, _ctx: &mut EventContext<'_>, _pos: Point) {}

    /// The wheel turned by `delta` notches while the pointer was over the
    /// widget. Positive values are away from the user.
    fn on_mouse_wheel_moved(&mut self, _ctx: &mut EventContext<'_>, _delta: i32) {}

    fn on_key_pressed(&mut self, _ctx: &mut EventContext<'_>, _key: &KeyEvent) {}

    fn on_key_released(&mut self, _ctx: &mut EventContext<'_>, _key: &KeyEvent) {}

    fn on_text_entered(&mut self, _ctx: &mut EventContext<'_>, _ch: char) {}

    fn on_focus_in(&mut self, _ctx: &mut EventContext<'_>) {}

    fn on_focus_out(&mut self, _ctx: &mut EventContext<'_>) {}

    // =========================================================================
    // Delegating accessors
    // =========================================================================

    /// Position relative to the parent, and size.
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    fn is_selectable(&self) -> bool {
        self.widget_base().is_selectable()
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    fn state(&self) -> ActivationState {
        self.widget_base().state()
    }
}

impl dyn Widget {
    /// Downcast to a concrete widget type.
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        let any: &dyn Any = self;
        any.downcast_ref::<W>()
    }

    /// Downcast to a concrete widget type, mutably.
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<W>()
    }
}
