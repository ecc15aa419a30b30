//! Per-state color palettes for widget boxes.

use tessera_core::ActivationState;
use tessera_render::Color;

/// The two families of widget boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// Clickable boxes: buttons, check boxes, arrows.
    Click,
    /// Text-input boxes.
    Input,
}

/// Colors for one box family.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub text: Color,
    pub text_hover: Color,
    pub text_focus: Color,
    pub text_disabled: Color,
    pub fill: Color,
    pub fill_hover: Color,
    pub fill_pressed: Color,
    pub fill_disabled: Color,
    pub border: Color,
    pub border_focus: Color,
    /// Background of selected text.
    pub selection: Color,
    /// Text color of input placeholders.
    pub placeholder: Color,
}

/// The resolved colors for a box in one activation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePalette {
    pub fill: Color,
    pub border: Color,
    pub text: Color,
}

impl BoxStyle {
    /// The default style for clickable boxes.
    pub fn click() -> Self {
        Self {
            text: Color::from_rgb8(0x44, 0x44, 0x44),
            text_hover: Color::from_rgb8(0x22, 0x22, 0x22),
            text_focus: Color::from_rgb8(0x00, 0x00, 0x00),
            text_disabled: Color::from_rgb8(0xa0, 0xa0, 0xa0),
            fill: Color::from_rgb8(0xe6, 0xe8, 0xe0),
            fill_hover: Color::from_rgb8(0xf0, 0xf2, 0xea),
            fill_pressed: Color::from_rgb8(0xcc, 0xce, 0xc6),
            fill_disabled: Color::from_rgb8(0xee, 0xee, 0xee),
            border: Color::from_rgb8(0x90, 0x92, 0x8a),
            border_focus: Color::from_rgb8(0x33, 0x66, 0xcc),
            selection: Color::from_rgba8(0x99, 0xbb, 0xee, 0xa0),
            placeholder: Color::from_rgb8(0xaa, 0xaa, 0xaa),
        }
    }

    /// The default style for text-input boxes.
    pub fn input() -> Self {
        Self {
            text: Color::from_rgb8(0x00, 0x00, 0x00),
            text_hover: Color::from_rgb8(0x00, 0x00, 0x00),
            text_focus: Color::from_rgb8(0x00, 0x00, 0x00),
            text_disabled: Color::from_rgb8(0xa0, 0xa0, 0xa0),
            fill: Color::WHITE,
            fill_hover: Color::WHITE,
            fill_pressed: Color::WHITE,
            fill_disabled: Color::from_rgb8(0xf4, 0xf4, 0xf4),
            ..Self::click()
        }
    }

    /// Resolve the colors for `state`.
    pub fn palette(&self, state: ActivationState) -> StatePalette {
        match state {
            ActivationState::Default => StatePalette {
                fill: self.fill,
                border: self.border,
                text: self.text,
            },
            ActivationState::Hovered => StatePalette {
                fill: self.fill_hover,
                border: self.border,
                text: self.text_hover,
            },
            ActivationState::Pressed => StatePalette {
                fill: self.fill_pressed,
                border: self.border_focus,
                text: self.text_focus,
            },
            ActivationState::Focused => StatePalette {
                fill: self.fill,
                border: self.border_focus,
                text: self.text_focus,
            },
            ActivationState::Disabled => StatePalette {
                fill: self.fill_disabled,
                border: self.border,
                text: self.text_disabled,
            },
        }
    }
}
