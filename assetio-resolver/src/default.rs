//! Filesystem resolver with no knowledge of entity references.
//!
//! Identifiers come in three shapes:
//! - absolute paths, used as-is after normalization
//! - file-relative paths (`./x`, `../x`), anchored to the anchor's directory
//! - search paths (`x/y.usd`), anchored when that file exists, otherwise
//!   looked up in the working directory and then each search path

use crate::asset::{Asset, FilesystemAsset, FilesystemWritableAsset, WritableAsset};
use crate::config::ResolverConfig;
use crate::error::{ResolverError, ResolverResult};
use crate::path;
use crate::resolver::Resolver;
use assetio_types::{AssetInfo, ResolvedPath, Timestamp, WriteMode};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct DefaultResolver {
    search_paths: Vec<PathBuf>,
    working_dir: Option<PathBuf>,
}

impl DefaultResolver {
    /// A resolver with no search paths, relative to the process working
    /// directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new().with_search_paths(config.search_paths.clone())
    }

    #[must_use]
    pub fn with_search_paths(mut self, search_paths: Vec<PathBuf>) -> Self {
        self.search_paths = search_paths;
        self
    }

    /// Pins the directory relative paths are resolved against.
    #[must_use]
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    #[must_use]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
    }

    fn existing(path: String) -> Option<ResolvedPath> {
        Path::new(&path).exists().then(|| ResolvedPath::new(path))
    }

    fn resolve_search_path(&self, asset_path: &str) -> Option<ResolvedPath> {
        std::iter::once(self.working_dir())
            .chain(self.search_paths.iter().cloned())
            .find_map(|dir| Self::existing(path::absolute(asset_path, &dir)))
    }
}

impl Resolver for DefaultResolver {
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> ResolverResult<String> {
        if asset_path.is_empty() {
            return Ok(String::new());
        }
        if Path::new(asset_path).is_absolute() {
            return Ok(path::normalize(asset_path));
        }
        if anchor.is_empty() {
            return Ok(if path::is_search_path(asset_path) {
                path::normalize(asset_path)
            } else {
                path::absolute(asset_path, &self.working_dir())
            });
        }

        let anchored = path::anchor_to(anchor.as_str(), asset_path);
        if path::is_search_path(asset_path) && !Path::new(&anchored).exists() {
            return Ok(path::normalize(asset_path));
        }
        Ok(anchored)
    }

    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        if asset_path.is_empty() {
            return String::new();
        }
        if anchor.is_empty() {
            return path::absolute(asset_path, &self.working_dir());
        }
        path::anchor_to(anchor.as_str(), asset_path)
    }

    fn resolve(&self, asset_path: &str) -> ResolvedPath {
        if asset_path.is_empty() {
            return ResolvedPath::empty();
        }
        let resolved = if path::is_search_path(asset_path) {
            self.resolve_search_path(asset_path)
        } else {
            Self::existing(path::absolute(asset_path, &self.working_dir()))
        };
        resolved.unwrap_or_else(|| {
            debug!(asset_path, "Asset not found on disk");
            ResolvedPath::empty()
        })
    }

    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath {
        if asset_path.is_empty() {
            return ResolvedPath::empty();
        }
        ResolvedPath::new(path::absolute(asset_path, &self.working_dir()))
    }

    fn get_extension(&self, asset_path: &str) -> ResolverResult<String> {
        Ok(path::extension(asset_path))
    }

    fn get_asset_info(&self, _asset_path: &str, resolved_path: &ResolvedPath) -> AssetInfo {
        AssetInfo {
            asset_name: resolved_path
                .as_path()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            ..AssetInfo::default()
        }
    }

    fn get_modification_timestamp(&self, _asset_path: &str, resolved_path: &ResolvedPath) -> Timestamp {
        if resolved_path.is_empty() {
            return Timestamp::invalid();
        }
        fs::metadata(resolved_path.as_path())
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| Timestamp::from_system_time(modified).ok())
            .unwrap_or_else(Timestamp::invalid)
    }

    fn open_asset(&self, resolved_path: &ResolvedPath) -> ResolverResult<Arc<dyn Asset>> {
        let asset = FilesystemAsset::open(resolved_path.as_path())
            .map_err(|e| ResolverError::io(resolved_path.as_path(), e))?;
        Ok(Arc::new(asset))
    }

    fn can_write_asset_to_path(&self, resolved_path: &ResolvedPath, why_not: Option<&mut String>) -> bool {
        let reason = if resolved_path.is_empty() {
            Some("empty path".to_string())
        } else {
            match fs::metadata(resolved_path.as_path()) {
                Ok(meta) if meta.is_dir() => Some(format!("{resolved_path} is a directory")),
                Ok(meta) if meta.permissions().readonly() => {
                    Some(format!("{resolved_path} is read-only"))
                }
                _ => None,
            }
        };

        match reason {
            Some(reason) => {
                if let Some(why_not) = why_not {
                    *why_not = reason;
                }
                false
            }
            None => true,
        }
    }

    fn open_asset_for_write(
        &self,
        resolved_path: &ResolvedPath,
        write_mode: WriteMode,
    ) -> ResolverResult<Arc<dyn WritableAsset>> {
        let asset = FilesystemWritableAsset::create(resolved_path.as_path(), write_mode)
            .map_err(|e| ResolverError::io(resolved_path.as_path(), e))?;
        Ok(Arc::new(asset))
    }
}
