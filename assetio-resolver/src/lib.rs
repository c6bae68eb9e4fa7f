//! Asset path resolution with managed entity reference support.
//!
//! [`ManagedResolver`] sits in front of a reference-unaware [`Resolver`]
//! (normally [`DefaultResolver`]). For each operation it asks the asset
//! manager whether the incoming identifier is an entity reference. Managed
//! references are kept verbatim through identifier creation and resolve,
//! and are mapped to a concrete file location on demand, once per call,
//! when an operation needs real bytes. Everything else passes straight
//! through to the fallback.

mod asset;
mod config;
mod default;
mod dispatcher;
mod error;
mod lookup;
pub mod path;
mod resolver;

pub use asset::{Asset, FilesystemAsset, FilesystemWritableAsset, WritableAsset};
pub use config::{LOGGING_SEVERITY_ENV_VAR, ResolverConfig, SEARCH_PATH_ENV_VAR};
pub use default::DefaultResolver;
pub use dispatcher::{HOST_DISPLAY_NAME, HOST_IDENTIFIER, ManagedResolver, host_interface};
pub use error::{ResolverError, ResolverResult};
pub use lookup::LocationLookup;
pub use resolver::Resolver;

pub use assetio_types::{AssetInfo, ResolvedPath, Timestamp, WriteMode};
