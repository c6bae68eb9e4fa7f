//! Error types for the manager layer.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for manager operations.
pub type ManagerResult<T> = Result<T, ManagerError>;

/// Errors raised by the host-side manager machinery.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("invalid entity reference: {0}")]
    InvalidEntityReference(String),

    #[error("manager '{0}' is not provided by the implementation factory")]
    ManagerNotFound(String),

    #[error("failed to read manager config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manager config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid setting '{key}': {detail}")]
    InvalidSetting { key: String, detail: String },

    #[error("failed to load library {path:?}: {detail}")]
    Library { path: PathBuf, detail: String },
}

/// Error codes a manager may report for a single batch element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ErrorCode {
    Unknown = 128,
    InvalidEntityReference = 129,
    MalformedEntityReference = 130,
    EntityAccessError = 131,
    EntityResolutionError = 132,
    InvalidPreflightHint = 133,
    InvalidTraitSet = 134,
}

impl ErrorCode {
    /// Numeric wire value of the code.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::InvalidEntityReference => "invalidEntityReference",
            Self::MalformedEntityReference => "malformedEntityReference",
            Self::EntityAccessError => "entityAccessError",
            Self::EntityResolutionError => "entityResolutionError",
            Self::InvalidPreflightHint => "invalidPreflightHint",
            Self::InvalidTraitSet => "invalidTraitSet",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure outcome for one element of a batch query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct BatchElementError {
    pub code: ErrorCode,
    pub message: String,
}

impl BatchElementError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
