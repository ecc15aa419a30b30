//! Core types for the Tessera widget toolkit.
//!
//! This crate holds the pieces of the widget system that do not depend on
//! rendering or styling:
//!
//! - [`WidgetId`]: versioned arena keys naming widgets in a tree
//! - [`ActivationState`]: the per-widget interaction states
//! - [`Selection`]: the range model used by text-editing widgets
//! - [`SessionClock`]: the per-frame elapsed-time counter
//! - [`logging`]: tracing targets and tree-dump options

pub mod clock;
pub mod error;
pub mod id;
pub mod logging;
pub mod selection;
pub mod state;

pub use clock::{SessionClock, SessionTime};
pub use error::{CoreError, CoreResult};
pub use id::WidgetId;
pub use logging::TreeFormatOptions;
pub use selection::Selection;
pub use state::ActivationState;
