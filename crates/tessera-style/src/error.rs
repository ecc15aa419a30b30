//! Error types for theme configuration.

use std::path::PathBuf;

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or applying a theme.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The TOML document could not be parsed.
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Theme serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset named by the configuration does not exist.
    #[error("Missing theme asset '{path}'")]
    MissingAsset { path: PathBuf },

    /// The text size is too small to lay out.
    #[error("Invalid text size {0}: must be at least 2")]
    InvalidTextSize(u32),

    /// Invalid property value.
    #[error("Invalid value for theme property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-asset error.
    pub fn missing_asset(path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset { path: path.into() }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
