//! Prelude module for Tessera.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use tessera::prelude::*;
//! ```
//!
//! This provides access to:
//! - The GUI controller (`Gui`, `GuiError`)
//! - Widget foundation (`Widget`, `WidgetBase`, `WidgetTree`, `WidgetId`)
//! - The reference widgets (`Button`, `Label`, `TextBox`, etc.)
//! - Containers and layouts (`StackBox`, `Form`, `Panel`)
//! - Input events and geometry (`InputEvent`, `Point`, `Size`, `Rect`)

// ============================================================================
// Controller
// ============================================================================

pub use crate::{Gui, GuiError};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{EventContext, Widget, WidgetBase, WidgetTree};
pub use tessera_core::{ActivationState, WidgetId};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    Button, CheckBox, ImageButton, ImageWidget, Label, LabelPlacement, OptionsBox, ProgressBar,
    Slider, SliderConfig, SliderRange, TextBox,
};

// ============================================================================
// Containers and Layout
// ============================================================================

pub use crate::widget::layout::{Alignment, Orientation};
pub use crate::widget::widgets::{Form, Panel, StackBox};
pub use crate::widget::ContentMargins;

// ============================================================================
// Input
// ============================================================================

pub use crate::widget::{CursorShape, InputEvent, Key, KeyEvent, KeyboardModifiers, MouseButton};

// ============================================================================
// Geometry, Rendering and Theme
// ============================================================================

pub use tessera_render::{
    Color, Image, ImageId, ImageScaleMode, Point, Rect, RecordingSink, RenderContext, RenderSink,
    Size, Wallpaper,
};
pub use tessera_style::{Theme, ThemeConfig};
