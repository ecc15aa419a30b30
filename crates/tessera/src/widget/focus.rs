//! Focus management for widget trees.
//!
//! [`FocusManager`] tracks which widget holds keyboard focus and moves it
//! around the tree on click and on tab navigation.
//!
//! # Tab Order
//!
//! Tab order is the depth-first pre-order of the tree: parents before
//! children, siblings in insertion order, which is also paint order. Hidden
//! subtrees are skipped entirely; disabled and non-focusable widgets are
//! skipped individually. Navigation wraps at both ends.
//!
//! # Focus Change
//!
//! Moving focus from `A` to `B`:
//! 1. `A` loses its focus flag, gets `on_focus_out` and settles into
//!    Hovered (if under the pointer) or Default
//! 2. `B` gets its focus flag, `on_focus_in` and the Focused state

use tessera_core::logging::targets;
use tessera_core::{ActivationState, WidgetId};

use super::activation::{apply_state, resting_state};
use super::tree::WidgetTree;

/// Manages keyboard focus for a widget tree.
#[derive(Debug, Default)]
pub struct FocusManager {
    focused_widget: Option<WidgetId>,
}

impl FocusManager {
    /// Create a new focus manager.
    pub fn new() -> Self {
        Self {
            focused_widget: None,
        }
    }

    /// Get the currently focused widget.
    #[inline]
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused_widget
    }

    /// Check if a specific widget has focus.
    #[inline]
    pub fn has_focus(&self, widget_id: WidgetId) -> bool {
        self.focused_widget == Some(widget_id)
    }

    /// Set focus to a specific widget.
    ///
    /// `hovered` is the widget under the pointer; the widget losing focus
    /// settles into Hovered if it is that widget.
    ///
    /// Returns `false` and leaves focus unchanged if the widget cannot take
    /// focus (missing, hidden, disabled or not focusable).
    pub fn set_focus(
        &mut self,
        tree: &mut WidgetTree,
        widget_id: WidgetId,
        hovered: Option<WidgetId>,
    ) -> bool {
        let can_focus = tree
            .get(widget_id)
            .is_some_and(|widget| widget.widget_base().accepts_focus());
        if !can_focus {
            return false;
        }

        if self.focused_widget == Some(widget_id) {
            return true;
        }

        if let Some(old_id) = self.focused_widget.take() {
            Self::unfocus_widget(tree, old_id, hovered == Some(old_id));
        }

        Self::focus_widget(tree, widget_id);
        self.focused_widget = Some(widget_id);
        tracing::trace!(target: targets::ROUTER, id = widget_id.as_raw(), "focus moved");
        true
    }

    /// Clear focus from the currently focused widget.
    pub fn clear_focus(&mut self, tree: &mut WidgetTree, hovered: Option<WidgetId>) {
        if let Some(old_id) = self.focused_widget.take() {
            Self::unfocus_widget(tree, old_id, hovered == Some(old_id));
        }
    }

    /// Drop the focus reference without notifying the widget. Used when the
    /// widget no longer exists.
    pub(crate) fn forget(&mut self, widget_id: WidgetId) {
        if self.focused_widget == Some(widget_id) {
            self.focused_widget = None;
        }
    }

    /// Move focus to the next focusable widget in tab order, wrapping from
    /// the last to the first.
    ///
    /// If nothing is focused, the first focusable widget gets focus.
    /// Returns `false` if there is no focusable widget.
    pub fn focus_next(&mut self, tree: &mut WidgetTree, hovered: Option<WidgetId>) -> bool {
        let tab_order = Self::build_tab_order(tree);
        let Some(&first) = tab_order.first() else {
            return false;
        };

        let next_id = self
            .focused_widget
            .and_then(|current| tab_order.iter().position(|&id| id == current))
            .map(|pos| tab_order[(pos + 1) % tab_order.len()])
            .unwrap_or(first);

        self.set_focus(tree, next_id, hovered)
    }

    /// Move focus to the previous focusable widget in tab order, wrapping
    /// from the first to the last.
    pub fn focus_previous(&mut self, tree: &mut WidgetTree, hovered: Option<WidgetId>) -> bool {
        let tab_order = Self::build_tab_order(tree);
        let Some(&last) = tab_order.last() else {
            return false;
        };

        let prev_id = self
            .focused_widget
            .and_then(|current| tab_order.iter().position(|&id| id == current))
            .map(|pos| {
                if pos == 0 {
                    last
                } else {
                    tab_order[pos - 1]
                }
            })
            .unwrap_or(last);

        self.set_focus(tree, prev_id, hovered)
    }

    /// The widgets tab navigation visits, in order.
    pub fn build_tab_order(tree: &WidgetTree) -> Vec<WidgetId> {
        tree.visible_depth_first()
            .into_iter()
            .filter(|&id| {
                tree.get(id)
                    .is_some_and(|widget| widget.widget_base().in_tab_order())
            })
            .collect()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn unfocus_widget(tree: &mut WidgetTree, widget_id: WidgetId, under_pointer: bool) {
        tree.dispatch(widget_id, false, |widget, ctx| {
            widget.widget_base_mut().set_focused(false);
            widget.on_focus_out(ctx);
            if widget.state() == ActivationState::Focused {
                apply_state(widget, ctx, resting_state(under_pointer, false));
            }
        });
    }

    fn focus_widget(tree: &mut WidgetTree, widget_id: WidgetId) {
        tree.dispatch(widget_id, false, |widget, ctx| {
            widget.widget_base_mut().set_focused(true);
            widget.on_focus_in(ctx);
            apply_state(widget, ctx, ActivationState::Focused);
        });
    }
}
