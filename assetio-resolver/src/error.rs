//! Error types for the resolver.

use assetio_manager::{BatchElementError, ErrorCode, ManagerError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolverResult<T> = Result<T, ResolverError>;

#[derive(Debug, Error)]
pub enum ResolverError {
    /// No usable asset manager could be set up.
    #[error("asset manager plugin not found, check {env_var} is set: {detail}")]
    Configuration {
        env_var: &'static str,
        detail: String,
    },

    /// The manager reported a failure resolving a reference.
    #[error("{code}: {message}")]
    Query { code: ErrorCode, message: String },

    #[error("manager error: {0}")]
    Manager(#[from] ManagerError),

    #[error("invalid value for {var}: {detail}")]
    InvalidEnv { var: &'static str, detail: String },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ResolverError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<BatchElementError> for ResolverError {
    fn from(err: BatchElementError) -> Self {
        Self::Query {
            code: err.code,
            message: err.message,
        }
    }
}
