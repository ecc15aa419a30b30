//! Input routing.
//!
//! [`EventRouter`] turns raw [`InputEvent`]s into widget hook calls. It
//! keeps three references into the tree:
//!
//! - the **hovered** widget, the enabled widget under the pointer
//! - the **pressed** widget, which captured the pointer on a left-button
//!   press and keeps receiving pointer moves and the release until the
//!   button goes up, wherever the pointer is
//! - the **focused** widget (held by the [`FocusManager`]), which receives
//!   keyboard and text input
//!
//! All three are plain ids. They are checked against the tree before every
//! event: removed widgets are forgotten, and widgets that are disabled or
//! hidden (themselves or through an ancestor) are released. Removal through
//! [`Gui`](crate::Gui) calls [`EventRouter::forget`] proactively.
//!
//! Pointer positions handed to widget hooks are local to the widget.

use tessera_core::logging::{span_names, targets};
use tessera_core::{ActivationState, WidgetId};
use tessera_render::Point;

use super::activation::{apply_state, resting_state};
use super::context::EventContext;
use super::events::{InputEvent, Key, KeyChord, KeyEvent, KeyboardModifiers, MouseButton};
use super::focus::FocusManager;
use super::traits::Widget;
use super::tree::WidgetTree;

/// Key bindings the router handles itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Moves focus forward in tab order.
    pub next_widget: KeyChord,
    /// Moves focus backward in tab order.
    pub previous_widget: KeyChord,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            next_widget: KeyChord::new(Key::Tab, KeyboardModifiers::NONE),
            previous_widget: KeyChord::new(Key::Tab, KeyboardModifiers::SHIFT),
        }
    }
}

/// Routes input events to the widgets of one tree.
#[derive(Debug, Default)]
pub struct EventRouter {
    config: RouterConfig,
    focus: FocusManager,
    hovered: Option<WidgetId>,
    pressed: Option<WidgetId>,
    pointer: Point,
}

impl EventRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RouterConfig) {
        self.config = config;
    }

    #[inline]
    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused_widget()
    }

    #[inline]
    pub fn hovered(&self) -> Option<WidgetId> {
        self.hovered
    }

    /// The widget holding the pointer capture.
    #[inline]
    pub fn pressed(&self) -> Option<WidgetId> {
        self.pressed
    }

    /// The last pointer position seen, in tree coordinates.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Route one event. Window-level events are not handled here.
    pub fn route(&mut self, tree: &mut WidgetTree, event: &InputEvent) {
        let _span = tracing::trace_span!(target: targets::ROUTER, span_names::DISPATCH).entered();
        self.validate(tree);

        match *event {
            InputEvent::PointerMoved { position } => self.pointer_moved(tree, position),
            InputEvent::PointerButtonDown {
                position,
                button: MouseButton::Left,
            } => self.pointer_pressed(tree, position),
            InputEvent::PointerButtonUp {
                position,
                button: MouseButton::Left,
            } => self.pointer_released(tree, position),
            InputEvent::PointerButtonDown { .. } | InputEvent::PointerButtonUp { .. } => {}
            InputEvent::WheelScrolled { position, delta } => {
                self.wheel_scrolled(tree, position, delta)
            }
            InputEvent::KeyDown(key) => self.key_pressed(tree, &key),
            InputEvent::KeyUp(key) => {
                self.to_focused(tree, |widget, ctx| widget.on_key_released(ctx, &key));
            }
            InputEvent::TextEntered(ch) => {
                self.to_focused(tree, |widget, ctx| widget.on_text_entered(ctx, ch));
            }
            InputEvent::WindowClosed => {}
        }
    }

    /// Give keyboard focus to `id`. Returns false if it cannot take focus.
    pub fn set_focus(&mut self, tree: &mut WidgetTree, id: WidgetId) -> bool {
        self.focus.set_focus(tree, id, self.hovered)
    }

    pub fn clear_focus(&mut self, tree: &mut WidgetTree) {
        self.focus.clear_focus(tree, self.hovered);
    }

    /// Move focus forward in tab order.
    pub fn focus_next(&mut self, tree: &mut WidgetTree) -> bool {
        self.focus.focus_next(tree, self.hovered)
    }

    /// Move focus backward in tab order.
    pub fn focus_previous(&mut self, tree: &mut WidgetTree) -> bool {
        self.focus.focus_previous(tree, self.hovered)
    }

    /// Stop routing input to `id`: it loses focus (with notification),
    /// capture and hover. Used before disabling or hiding a widget.
    pub fn release(&mut self, tree: &mut WidgetTree, id: WidgetId) {
        if self.focus.has_focus(id) {
            self.focus.clear_focus(tree, None);
        }
        if self.pressed == Some(id) {
            self.pressed = None;
        }
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// [`release`](Self::release) `id` and every widget below it.
    pub fn release_subtree(&mut self, tree: &mut WidgetTree, id: WidgetId) {
        for widget in tree.depth_first(id) {
            self.release(tree, widget);
        }
    }

    /// Drop every reference to the given ids without notifying anyone.
    pub fn forget(&mut self, ids: &[WidgetId]) {
        for &id in ids {
            self.focus.forget(id);
            if self.pressed == Some(id) {
                self.pressed = None;
            }
            if self.hovered == Some(id) {
                self.hovered = None;
            }
        }
    }

    fn validate(&mut self, tree: &mut WidgetTree) {
        let held = [self.focus.focused_widget(), self.hovered, self.pressed];
        let stale: Vec<WidgetId> = held
            .into_iter()
            .flatten()
            .filter(|&id| !tree.contains_widget(id))
            .collect();
        if !stale.is_empty() {
            tracing::debug!(target: targets::ROUTER, count = stale.len(), "dropping stale widget references");
            self.forget(&stale);
        }

        let held = [self.focus.focused_widget(), self.hovered, self.pressed];
        for id in held.into_iter().flatten() {
            if !Self::takes_input(tree, id) {
                tracing::debug!(target: targets::ROUTER, id = id.as_raw(), "releasing widget that no longer takes input");
                self.release(tree, id);
            }
        }
    }

    /// Whether `id` is enabled and shown along its whole parent chain.
    fn takes_input(tree: &WidgetTree, id: WidgetId) -> bool {
        tree.is_shown(id) && tree.get(id).is_some_and(|widget| widget.is_enabled())
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// The enabled widget under `position`. Disabled widgets are hit, but
    /// take no input.
    fn target_at(tree: &WidgetTree, position: Point) -> Option<WidgetId> {
        tree.widget_at(position)
            .filter(|&id| tree.get(id).is_some_and(|widget| widget.is_enabled()))
    }

    fn local(tree: &WidgetTree, id: WidgetId, position: Point) -> Point {
        position - tree.absolute_position(id).unwrap_or(Point::ZERO)
    }

    fn pointer_moved(&mut self, tree: &mut WidgetTree, position: Point) {
        self.pointer = position;
        let hit = Self::target_at(tree, position);

        if hit != self.hovered {
            if let Some(old) = self.hovered.take() {
                Self::leave(tree, old);
            }
            if let Some(new) = hit {
                Self::enter(tree, new);
            }
            tracing::trace!(
                target: targets::ROUTER,
                hovered = ?hit.map(WidgetId::as_raw),
                "hover changed"
            );
            self.hovered = hit;
        }

        if let Some(target) = self.pressed.or(hit) {
            let local = Self::local(tree, target, position);
            let captured = self.pressed == Some(target);
            tree.dispatch(target, captured, |widget, ctx| widget.on_mouse_moved(ctx, local));
        }
    }

    fn enter(tree: &mut WidgetTree, id: WidgetId) {
        tree.dispatch(id, false, |widget, ctx| {
            let now = ctx.session_time();
            if let Some(tooltip) = widget.widget_base_mut().tooltip_mut() {
                tooltip.arm(now);
            }
            widget.on_mouse_enter(ctx);
            if widget.state() != ActivationState::Pressed {
                apply_state(widget, ctx, ActivationState::Hovered);
            }
        });
    }

    fn leave(tree: &mut WidgetTree, id: WidgetId) {
        tree.dispatch(id, false, |widget, ctx| {
            if let Some(tooltip) = widget.widget_base_mut().tooltip_mut() {
                tooltip.disarm();
            }
            widget.on_mouse_leave(ctx);
            if widget.state() == ActivationState::Hovered {
                let focused = widget.has_focus();
                apply_state(widget, ctx, resting_state(false, focused));
            }
        });
    }

    fn pointer_pressed(&mut self, tree: &mut WidgetTree, position: Point) {
        self.pointer = position;
        let target = Self::target_at(tree, position).filter(|&id| {
            tree.get(id)
                .is_some_and(|widget| widget.is_focusable() || widget.is_selectable())
        });

        match target {
            Some(id) if tree.get(id).is_some_and(|w| w.widget_base().accepts_focus()) => {
                self.focus.set_focus(tree, id, self.hovered);
            }
            _ => self.focus.clear_focus(tree, self.hovered),
        }

        let Some(id) = target else {
            return;
        };
        tracing::trace!(target: targets::ROUTER, id = id.as_raw(), "pointer captured");
        self.pressed = Some(id);
        let local = Self::local(tree, id, position);
        tree.dispatch(id, true, |widget, ctx| {
            apply_state(widget, ctx, ActivationState::Pressed);
            widget.on_mouse_pressed(ctx, local);
        });
    }

    fn pointer_released(&mut self, tree: &mut WidgetTree, position: Point) {
        self.pointer = position;
        let Some(id) = self.pressed.take() else {
            return;
        };
        tracing::trace!(target: targets::ROUTER, id = id.as_raw(), "pointer released");
        let local = Self::local(tree, id, position);
        let inside = tree.contains(id, position);
        tree.dispatch(id, true, |widget, ctx| {
            widget.on_mouse_released(ctx, local);
            if widget.state() == ActivationState::Pressed {
                let focused = widget.has_focus();
                apply_state(widget, ctx, resting_state(inside, focused));
            }
        });
    }

    fn wheel_scrolled(&mut self, tree: &mut WidgetTree, position: Point, delta: i32) {
        self.pointer = position;
        if let Some(id) = Self::target_at(tree, position) {
            let captured = self.pressed == Some(id);
            tree.dispatch(id, captured, |widget, ctx| widget.on_mouse_wheel_moved(ctx, delta));
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    fn key_pressed(&mut self, tree: &mut WidgetTree, key: &KeyEvent) {
        if self.config.next_widget.matches(key) {
            self.focus_next(tree);
            return;
        }
        if self.config.previous_widget.matches(key) {
            self.focus_previous(tree);
            return;
        }
        self.to_focused(tree, |widget, ctx| widget.on_key_pressed(ctx, key));
    }

    fn to_focused(
        &mut self,
        tree: &mut WidgetTree,
        f: impl FnOnce(&mut dyn Widget, &mut EventContext<'_>),
    ) {
        let Some(id) = self
            .focus
            .focused_widget()
            .filter(|&id| Self::takes_input(tree, id))
        else {
            return;
        };
        let captured = self.pressed == Some(id);
        tree.dispatch(id, captured, f);
    }
}
