//! The activation state machine.
//!
//! [`apply_state`] is the only way a widget's [`ActivationState`] changes.
//! It is idempotent, notifies the widget once per effective transition, and
//! keeps Disabled sticky: only [`enable`] leaves it.
//!
//! | input                     | precondition              | new state |
//! |---------------------------|---------------------------|-----------|
//! | pointer enters            | not Disabled, not Pressed | Hovered |
//! | pointer leaves            | was Hovered               | Focused if focused, else Default |
//! | left button down          | focusable or selectable   | Pressed |
//! | left button up            | was Pressed               | Hovered if inside, else Focused/Default |
//! | focus moves in            | enabled                   | Focused |
//! | focus moves out           | -                         | Hovered if under pointer, else Default |
//! | disable                   | any                       | Disabled |
//! | enable                    | Disabled                  | Default |

use tessera_core::ActivationState;

use super::context::EventContext;
use super::traits::Widget;

/// Move `widget` to `state`.
///
/// Returns true if the state changed. Applying the current state again is a
/// no-op and does not notify. A disabled widget only accepts
/// [`ActivationState::Disabled`]; use [`enable`] to bring it back.
pub fn apply_state(
    widget: &mut dyn Widget,
    ctx: &mut EventContext<'_>,
    state: ActivationState,
) -> bool {
    let old = widget.widget_base().state();
    if old == state || old.is_disabled() {
        return false;
    }
    widget.widget_base_mut().set_state(state);
    widget.on_activation_changed(ctx, old, state);
    true
}

/// Leave the Disabled state. Returns true if the widget was disabled.
pub fn enable(widget: &mut dyn Widget, ctx: &mut EventContext<'_>) -> bool {
    let old = widget.widget_base().state();
    if !old.is_disabled() {
        return false;
    }
    widget.widget_base_mut().set_state(ActivationState::Default);
    widget.on_activation_changed(ctx, old, ActivationState::Default);
    true
}

/// Enter the Disabled state. The prior state is not remembered.
pub fn disable(widget: &mut dyn Widget, ctx: &mut EventContext<'_>) -> bool {
    apply_state(widget, ctx, ActivationState::Disabled)
}

/// The state a widget settles into when nothing is pressing it.
pub fn resting_state(under_pointer: bool, focused: bool) -> ActivationState {
    if under_pointer {
        ActivationState::Hovered
    } else if focused {
        ActivationState::Focused
    } else {
        ActivationState::Default
    }
}
