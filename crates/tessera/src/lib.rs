//! Tessera - a retained-mode widget toolkit.
//!
//! This is the main umbrella crate. It holds the widget system and the
//! [`Gui`] controller, and re-exports the core, render and style crates.
//!
//! # Example
//!
//! ```no_run
//! use tessera::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ThemeConfig::load("theme.toml")?;
//!     let mut gui = Gui::new(&config);
//!     let name = gui.add(TextBox::new(160.0).with_placeholder("Name"), "name")?;
//!     gui.add(Button::new("Greet"), "greet")?;
//!     gui.set_focus(name);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gui;
pub mod prelude;
pub mod widget;

pub use tessera_core::*;

pub use error::{GuiError, Result};
pub use gui::{Gui, ROOT_NAME};

/// Geometry and render-sink types.
pub mod render {
    pub use tessera_render::*;
}

/// Theme configuration and palettes.
pub mod style {
    pub use tessera_style::*;
}
