//! Raw input events and keyboard types.
//!
//! The host translates its windowing system's events into [`InputEvent`]s
//! and feeds them to [`Gui::process`](crate::Gui::process). Pointer
//! positions are in the GUI's coordinate space; the router converts them to
//! widget-local coordinates before calling widget hooks.

use tessera_render::Point;

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };

    /// Control + Shift modifiers.
    pub const CTRL_SHIFT: Self = Self {
        shift: true,
        control: true,
        alt: false,
    };

    /// Check if no modifiers are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keys the widget system distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Editing
    Backspace, Delete, Insert,
    Enter, Tab, Escape,

    // Whitespace
    Space,

    // Modifiers, when they arrive as key events of their own
    ShiftLeft, ShiftRight,
    ControlLeft, ControlRight,
    AltLeft, AltRight,

    /// Any key not listed above.
    Unknown,
}

impl Key {
    /// Returns true for either Shift key.
    #[inline]
    pub fn is_shift(self) -> bool {
        matches!(self, Key::ShiftLeft | Key::ShiftRight)
    }
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyEvent {
    /// Create a key event.
    pub const fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key event with no modifiers held.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    #[inline]
    pub fn shift(&self) -> bool {
        self.modifiers.shift
    }

    #[inline]
    pub fn control(&self) -> bool {
        self.modifiers.control
    }
}

/// A key together with the exact modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: KeyboardModifiers,
}

impl KeyChord {
    pub const fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Check whether `event` is this chord.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key == self.key && event.modifiers == self.modifiers
    }
}

/// A raw input event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved.
    PointerMoved { position: Point },
    /// A mouse button went down.
    PointerButtonDown { position: Point, button: MouseButton },
    /// A mouse button went up.
    PointerButtonUp { position: Point, button: MouseButton },
    /// The vertical wheel turned by `delta` notches; positive is away from
    /// the user.
    WheelScrolled { position: Point, delta: i32 },
    /// A key went down.
    KeyDown(KeyEvent),
    /// A key went up.
    KeyUp(KeyEvent),
    /// A character was typed.
    TextEntered(char),
    /// The window is closing.
    WindowClosed,
}

impl InputEvent {
    /// The pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerMoved { position }
            | Self::PointerButtonDown { position, .. }
            | Self::PointerButtonUp { position, .. }
            | Self::WheelScrolled { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The same event with its pointer position shifted by `-origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        match self {
            Self::PointerMoved { position } => Self::PointerMoved {
                position: position - origin,
            },
            Self::PointerButtonDown { position, button } => Self::PointerButtonDown {
                position: position - origin,
                button,
            },
            Self::PointerButtonUp { position, button } => Self::PointerButtonUp {
                position: position - origin,
                button,
            },
            Self::WheelScrolled { position, delta } => Self::WheelScrolled {
                position: position - origin,
                delta,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_requires_exact_modifiers() {
        let back = KeyChord::new(Key::Tab, KeyboardModifiers::SHIFT);
        assert!(back.matches(&KeyEvent::new(Key::Tab, KeyboardModifiers::SHIFT)));
        assert!(!back.matches(&KeyEvent::plain(Key::Tab)));
        assert!(!back.matches(&KeyEvent::new(Key::Tab, KeyboardModifiers::CTRL_SHIFT)));
    }

    #[test]
    fn test_relative_to_shifts_pointer_events_only() {
        let origin = Point::new(10.0, 20.0);
        let moved = InputEvent::PointerMoved {
            position: Point::new(15.0, 25.0),
        }
        .relative_to(origin);
        assert_eq!(moved.position(), Some(Point::new(5.0, 5.0)));

        let key = InputEvent::KeyDown(KeyEvent::plain(Key::A));
        assert_eq!(key.relative_to(origin), key);
        assert_eq!(key.position(), None);
    }
}
