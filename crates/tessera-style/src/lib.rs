//! Theme configuration and widget palettes for Tessera.
//!
//! - [`ThemeConfig`]: serializable theme description, loadable from TOML
//! - [`Theme`]: the validated, immutable result of [`ThemeConfig::apply`]
//! - [`FontMetrics`]: fixed-advance text measurement
//! - [`BoxStyle`]: per-state colors for clickable and input boxes
//!
//! Widgets hold a [`SharedTheme`] and re-read it whenever the GUI broadcasts
//! a theme change.

pub mod config;
pub mod font;
pub mod palette;
pub mod theme;

mod error;

pub use config::{CursorStyle, ThemeConfig};
pub use error::{Error, Result};
pub use font::FontMetrics;
pub use palette::{BoxKind, BoxStyle, StatePalette};
pub use theme::{SharedTheme, Theme};
