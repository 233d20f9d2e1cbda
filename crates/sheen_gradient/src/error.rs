//! Error types for sheen_gradient

use std::io;
use thiserror::Error;

/// Errors that can occur when loading or saving gradient files
#[derive(Error, Debug)]
pub enum GradientError {
    /// IO error when reading or writing the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed TOML, unknown easing name or invalid color
    #[error("Failed to parse gradient file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value that cannot be expressed as TOML
    #[error("Failed to serialize gradient: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for sheen_gradient operations
pub type Result<T> = std::result::Result<T, GradientError>;
