//! The reference widget set.
//!
//! # Display
//!
//! - [`Label`] - a line of text
//! - [`ImageWidget`] - a host image
//! - [`ProgressBar`] - a percentage bar
//! - [`Tooltip`] - delayed hover text, owned by a widget's base
//!
//! # Input
//!
//! - [`Button`] - fires on click, Enter or Space
//! - [`ImageButton`] - a button drawn from a three-frame image
//! - [`CheckBox`] - a two-state toggle
//! - [`TextBox`] - single-line text editing with selection and clipboard
//! - [`Slider`] - a value in a range, by drag, wheel or keys
//! - [`OptionsBox`] - one of a list of labelled values
//!
//! # Containers
//!
//! - [`StackBox`] - stacking along one axis
//! - [`Form`] - label/field rows
//! - [`Panel`] - children at fixed positions

mod button;
mod check_box;
mod containers;
mod image_button;
mod image_widget;
mod item_box;
mod label;
mod options_box;
mod progress_bar;
mod slider;
mod text_box;
mod tooltip;

pub use button::Button;
pub use check_box::CheckBox;
pub use containers::{Form, Panel, StackBox};
pub use image_button::ImageButton;
pub use image_widget::ImageWidget;
pub use item_box::{Arrow, BoxItem, CheckMark, ItemBox};
pub use label::Label;
pub use options_box::OptionsBox;
pub use progress_bar::{LabelPlacement, ProgressBar};
pub use slider::{Slider, SliderConfig, SliderRange};
pub use text_box::TextBox;
pub use tooltip::Tooltip;
