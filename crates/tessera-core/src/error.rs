//! Error types for the Tessera widget tree.

use std::fmt;

use crate::WidgetId;

/// Errors raised by structural widget-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The widget does not exist, or has already been removed.
    InvalidWidget(WidgetId),
    /// The widget exists but cannot hold children.
    NotAContainer(WidgetId),
    /// The root widget cannot be removed or reparented.
    RootWidget,
    /// The widget has a different concrete type than requested.
    TypeMismatch {
        /// The widget that was looked up.
        id: WidgetId,
        /// The requested type.
        expected: &'static str,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidget(id) => {
                write!(f, "Widget {id:?} does not exist or has been removed")
            }
            Self::NotAContainer(id) => {
                write!(f, "Widget {id:?} is not a container")
            }
            Self::RootWidget => write!(f, "The root widget cannot be removed"),
            Self::TypeMismatch { id, expected } => {
                write!(f, "Widget {id:?} is not a {expected}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for widget-tree operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
