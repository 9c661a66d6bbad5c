//! Error types for registry store operations.

use thiserror::Error;

/// Primary error type for registry operations.
///
/// The schema-level API (camera/format/control CRUD) deliberately does not
/// surface these: reads degrade to caller-supplied defaults and writes are
/// best-effort. Errors appear at the backend implementation boundary and
/// when parsing stored text values.
#[derive(Error, Debug)]
pub enum RegistryError {
    // Backend errors
    #[error("Backend unavailable for container '{container}'")]
    BackendUnavailable { container: String },

    #[error("Failed to open store at '{path}': {reason}")]
    StoreOpenFailed { path: String, reason: String },

    // Value errors
    #[error("Invalid fraction string: '{text}'")]
    InvalidFraction { text: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using RegistryError.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| RegistryError::Other(format!("{}: {e}", f().into())))
    }
}
