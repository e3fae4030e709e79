//! Error types for the locale detector.
//!
//! Locale resolution itself never fails; these errors come from loading
//! configuration and from the command-line front end.

use std::io;
use thiserror::Error;

/// Locale detector error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (unreadable or invalid config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations, terminal output).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No candidates were supplied and no fallback locale is configured.
    #[error("No locale could be resolved")]
    Unresolved,

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 3: No locale resolved
    /// - 10: IO error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) => 2,
            Self::Unresolved => 3,
            Self::Io(_) => 10,
            Self::Json(_) | Self::Yaml(_) | Self::Other(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::config("test").exit_code(), 2);
        assert_eq!(Error::invalid_arg("test").exit_code(), 2);
        assert_eq!(Error::Unresolved.exit_code(), 3);
        assert_eq!(Error::Io(io::Error::other("boom")).exit_code(), 10);
        assert_eq!(Error::other("").exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Error::config("bad yaml").to_string(), "Configuration error: bad yaml");
        assert_eq!(Error::Unresolved.to_string(), "No locale could be resolved");
    }
}
