//! Error types for entity_naming

use thiserror::Error;

/// Result type for entity_naming operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for entity_naming
#[derive(Error, Debug)]
pub enum Error {
    /// The requested (or configured default) style has no registered implementation
    #[error("Unknown style: {0:?}")]
    UnknownStyle(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("A process-wide style context is already initialized")]
    AlreadyInitialized,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// The style name an [`Error::UnknownStyle`] was raised for
    pub fn style_name(&self) -> Option<&str> {
        match self {
            Error::UnknownStyle(name) => Some(name),
            _ => None,
        }
    }
}

/// Convert TOML deserialization errors to entity_naming errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}
