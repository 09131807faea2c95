//! Error types for audio reading.
//!
//! Every failure of a read collapses into one of three kinds. The reader is
//! always left empty when one of these is returned.

use thiserror::Error;

/// Why a read did not succeed.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file could not be opened, or the location is not a local file.
    #[error("Cannot open {location}: {reason}")]
    ResourceUnavailable { location: String, reason: String },

    /// The decoding facility does not understand the content.
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Decoding started but the stream was corrupt or truncated.
    #[error("Decode failure: {0}")]
    DecodeFailure(String),
}

impl ReadError {
    pub(crate) fn unavailable(location: impl ToString, reason: impl ToString) -> Self {
        ReadError::ResourceUnavailable {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors loading a [`ReaderConfig`](crate::ReaderConfig) from disk.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience Result type for reader operations
pub type Result<T> = std::result::Result<T, ReadError>;
