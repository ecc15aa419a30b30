//! Widget system for Tessera.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: the state every widget shares
//! - [`WidgetTree`]: the arena owning the widgets, with layout propagation
//!   and named lookup
//! - [`EventRouter`]: hover, mouse capture, keyboard focus and tab order
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Size the widget from the theme in `on_theme_changed`
//! 4. Implement `draw()` in local coordinates
//!
//! ```ignore
//! use tessera::widget::*;
//! use tessera::render::{Color, RenderContext, Size};
//!
//! struct Swatch {
//!     base: WidgetBase,
//!     color: Color,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn on_theme_changed(&mut self, theme: &Theme) {
//!         let side = theme.box_height();
//!         self.base.set_size(Size::new(side, side));
//!     }
//!
//!     fn draw(&self, ctx: &mut RenderContext<'_>) {
//!         ctx.fill_rect(self.base.rect(), self.color);
//!     }
//! }
//! ```
//!
//! # Coordinate Systems
//!
//! - **Local coordinates**: origin at the widget's top-left corner; used by
//!   `draw` and by pointer positions passed to hooks
//! - **Parent coordinates**: a widget's position is relative to its parent
//! - **Tree coordinates**: relative to the root; see
//!   [`WidgetTree::absolute_position`]

pub mod activation;
mod base;
mod context;
pub mod cursor;
mod events;
mod focus;
pub mod layout;
mod registry;
mod router;
mod traits;
mod tree;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use base::WidgetBase;
#[cfg(feature = "system-clipboard")]
pub use context::SystemClipboard;
pub use context::{Clipboard, Environment, EventContext, MemoryClipboard};
pub use cursor::CursorShape;
pub use events::{InputEvent, Key, KeyChord, KeyEvent, KeyboardModifiers, MouseButton};
pub use focus::FocusManager;
pub use layout::{Arrangement, ContentMargins, Layout};
pub use registry::WidgetRegistry;
pub use router::{EventRouter, RouterConfig};
pub use traits::Widget;
pub use tree::{MAX_PROPAGATION_DEPTH, UpdateCallback, WidgetTree};
