//! Error types for the GUI controller.

use std::sync::Arc;

use tessera_core::CoreError;

/// Result type alias for GUI operations.
pub type Result<T> = std::result::Result<T, GuiError>;

/// Errors reported by [`Gui`](crate::Gui).
///
/// Theme errors are shared so the GUI can keep the error that deactivated
/// it while also handing it to the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GuiError {
    /// The theme configuration was rejected.
    #[error("Theme rejected: {0}")]
    Theme(#[source] Arc<tessera_style::Error>),

    /// A structural tree operation failed.
    #[error(transparent)]
    Tree(#[from] CoreError),

    /// No widget is registered under the name.
    #[error("No widget is registered as '{0}'")]
    UnknownName(String),
}

impl From<tessera_style::Error> for GuiError {
    fn from(err: tessera_style::Error) -> Self {
        Self::Theme(Arc::new(err))
    }
}
