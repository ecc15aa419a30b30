//! Mouse cursor shapes requested by widgets.
//!
//! Widgets ask for a cursor shape through their
//! [`EventContext`](super::EventContext), typically on mouse enter and
//! leave. The GUI only records the latest request; the host reads it with
//! [`Gui::cursor`](crate::Gui::cursor) and applies it to its window.

use cursor_icon::CursorIcon;

/// The shape of the mouse cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CursorShape {
    /// The default arrow cursor.
    #[default]
    Arrow,
    /// An I-beam, used over editable text.
    IBeam,
    /// A pointing hand, used over clickable elements.
    Hand,
    /// A crosshair for precise selection.
    Crosshair,
    /// A horizontal resize/drag cursor.
    ResizeHorizontal,
    /// A vertical resize/drag cursor.
    ResizeVertical,
    /// Indicates that the action is not allowed.
    Forbidden,
}

impl CursorShape {
    /// The platform-independent icon for this shape.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            Self::Arrow => CursorIcon::Default,
            Self::IBeam => CursorIcon::Text,
            Self::Hand => CursorIcon::Pointer,
            Self::Crosshair => CursorIcon::Crosshair,
            Self::ResizeHorizontal => CursorIcon::EwResize,
            Self::ResizeVertical => CursorIcon::NsResize,
            Self::Forbidden => CursorIcon::NotAllowed,
        }
    }
}

impl From<CursorShape> for CursorIcon {
    fn from(shape: CursorShape) -> Self {
        shape.to_cursor_icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_arrow() {
        assert_eq!(CursorShape::default(), CursorShape::Arrow);
        assert_eq!(CursorIcon::from(CursorShape::Arrow), CursorIcon::Default);
    }

    #[test]
    fn test_text_cursor_maps_to_text_icon() {
        assert_eq!(CursorShape::IBeam.to_cursor_icon(), CursorIcon::Text);
        assert_eq!(CursorShape::IBeam.to_cursor_icon().name(), "text");
    }
}
