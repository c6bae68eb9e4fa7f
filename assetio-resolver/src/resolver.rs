//! The resolution contract.

use crate::asset::{Asset, WritableAsset};
use crate::error::ResolverResult;
use assetio_types::{AssetInfo, ResolvedPath, Timestamp, WriteMode};
use std::sync::Arc;

/// Turns asset identifiers into concrete locations and opens them.
///
/// `asset_path` arguments are identifiers as authored or as returned by
/// [`Resolver::create_identifier`]; `resolved_path` arguments come from
/// [`Resolver::resolve`] or [`Resolver::resolve_for_new_asset`].
pub trait Resolver: Send + Sync {
    /// Builds the identifier for `asset_path`, anchoring relative paths to
    /// `anchor`.
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> ResolverResult<String>;

    /// Like [`Resolver::create_identifier`], for an asset that may not
    /// exist yet.
    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String;

    /// Resolves an identifier. An empty result means it could not be found.
    fn resolve(&self, asset_path: &str) -> ResolvedPath;

    /// Resolves the location a new asset would be written to.
    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath;

    /// File format extension of the asset, without the dot.
    fn get_extension(&self, asset_path: &str) -> ResolverResult<String>;

    fn get_asset_info(&self, asset_path: &str, resolved_path: &ResolvedPath) -> AssetInfo;

    fn get_modification_timestamp(&self, asset_path: &str, resolved_path: &ResolvedPath) -> Timestamp;

    fn open_asset(&self, resolved_path: &ResolvedPath) -> ResolverResult<Arc<dyn Asset>>;

    /// Whether an asset may be written at `resolved_path`. On `false`,
    /// `why_not` (if given) receives the reason.
    fn can_write_asset_to_path(&self, resolved_path: &ResolvedPath, why_not: Option<&mut String>) -> bool;

    fn open_asset_for_write(
        &self,
        resolved_path: &ResolvedPath,
        write_mode: WriteMode,
    ) -> ResolverResult<Arc<dyn WritableAsset>>;
}
