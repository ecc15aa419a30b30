//! Widget activation states.

use std::fmt;

/// The interaction state of a widget.
///
/// Exactly one state holds per widget at a time. The transition rules live
/// with the widget system; this type only names the states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivationState {
    /// Idle.
    #[default]
    Default,
    /// The pointer is over the widget.
    Hovered,
    /// A mouse button went down on the widget and has not been released.
    Pressed,
    /// The widget holds keyboard focus.
    Focused,
    /// The widget ignores all input.
    Disabled,
}

impl ActivationState {
    /// All states, in declaration order.
    pub const ALL: [ActivationState; 5] = [
        Self::Default,
        Self::Hovered,
        Self::Pressed,
        Self::Focused,
        Self::Disabled,
    ];

    /// Returns true for [`ActivationState::Disabled`].
    #[inline]
    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }
}

impl fmt::Display for ActivationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Hovered => "hovered",
            Self::Pressed => "pressed",
            Self::Focused => "focused",
            Self::Disabled => "disabled",
        };
        f.write_str(name)
    }
}
