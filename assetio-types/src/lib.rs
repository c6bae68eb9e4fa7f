//! Core type definitions for the assetio resolver.
//!
//! This crate defines the plain values that cross the resolution contract:
//! - Resolved paths handed to the file-I/O layer
//! - Modification timestamps, including the fixed epoch sentinel
//! - Asset metadata and write modes
//!
//! Nothing here knows about managed entity references; those live in
//! `assetio-manager`.

mod asset_info;
mod path;
mod timestamp;

pub use asset_info::{AssetInfo, WriteMode};
pub use path::ResolvedPath;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
