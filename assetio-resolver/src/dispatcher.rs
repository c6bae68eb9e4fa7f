//! Entity reference aware resolver.
//!
//! Every operation first classifies its identifier with the manager.
//! Managed references survive identifier creation and resolve untouched;
//! operations that need bytes look the location up again on each call.
//! Unmanaged identifiers go to the fallback unchanged.

use crate::asset::{Asset, WritableAsset};
use crate::config::ResolverConfig;
use crate::error::{ResolverError, ResolverResult};
use crate::lookup::LocationLookup;
use crate::resolver::Resolver;
use assetio_manager::{
    DEFAULT_CONFIG_ENV_VAR, HostInterface, Manager, ManagerFactory, ManagerImplementationFactory,
    SeverityFilter, SharedLogger, TracingLogger,
};
use assetio_types::{AssetInfo, ResolvedPath, Timestamp, WriteMode};
use std::sync::Arc;
use tracing::{debug, info};

pub const HOST_IDENTIFIER: &str = "org.openassetio.usdresolver";
pub const HOST_DISPLAY_NAME: &str = "OpenAssetIO USD Resolver";

/// Host description presented to managers.
#[must_use]
pub fn host_interface() -> HostInterface {
    HostInterface::new(HOST_IDENTIFIER, HOST_DISPLAY_NAME)
}

/// Routes each resolution operation to managed handling or to `F`.
#[derive(Debug)]
pub struct ManagedResolver<F> {
    lookup: LocationLookup,
    fallback: F,
}

impl<F: Resolver> ManagedResolver<F> {
    pub fn new(manager: Manager, fallback: F) -> Self {
        Self {
            lookup: LocationLookup::new(manager),
            fallback,
        }
    }

    /// Discovers the default manager described by `config`.
    ///
    /// Fails with [`ResolverError::Configuration`] when no manager config
    /// is set or the configured manager cannot be created.
    pub fn from_config(
        config: &ResolverConfig,
        factory: &dyn ManagerImplementationFactory,
        fallback: F,
    ) -> ResolverResult<Self> {
        let logger: SharedLogger = Arc::new(SeverityFilter::new(
            Arc::new(TracingLogger),
            config.log_severity,
        ));

        let manager = ManagerFactory::default_manager_for_interface(
            config.manager_config.as_deref(),
            &host_interface(),
            factory,
            logger,
        )
        .map_err(|e| ResolverError::Configuration {
            env_var: DEFAULT_CONFIG_ENV_VAR,
            detail: e.to_string(),
        })?
        .ok_or_else(|| ResolverError::Configuration {
            env_var: DEFAULT_CONFIG_ENV_VAR,
            detail: "no default manager configured".to_string(),
        })?;

        info!(
            manager = manager.identifier(),
            display_name = manager.display_name(),
            "Asset manager ready"
        );
        Ok(Self::new(manager, fallback))
    }

    #[must_use]
    pub fn manager(&self) -> &Manager {
        self.lookup.manager()
    }

    #[must_use]
    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    fn is_managed(&self, identifier: &str) -> bool {
        self.manager().is_entity_reference_string(identifier)
    }

    /// The managed location of `identifier`, or `identifier` itself.
    fn location_or_original(&self, identifier: &str) -> ResolverResult<String> {
        Ok(self
            .lookup
            .locate(identifier)?
            .unwrap_or_else(|| identifier.to_string()))
    }
}

impl<F: Resolver> Resolver for ManagedResolver<F> {
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> ResolverResult<String> {
        let result = if self.is_managed(asset_path) {
            asset_path.to_string()
        } else {
            let anchor = ResolvedPath::new(self.location_or_original(anchor.as_str())?);
            self.fallback.create_identifier(asset_path, &anchor)?
        };
        debug!(op = "create_identifier", asset_path, anchor = %anchor, result = %result);
        Ok(result)
    }

    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        let result = self.fallback.create_identifier_for_new_asset(asset_path, anchor);
        debug!(op = "create_identifier_for_new_asset", asset_path, anchor = %anchor, result = %result);
        result
    }

    fn resolve(&self, asset_path: &str) -> ResolvedPath {
        let result = if self.is_managed(asset_path) {
            ResolvedPath::new(asset_path)
        } else {
            self.fallback.resolve(asset_path)
        };
        debug!(op = "resolve", asset_path, result = %result);
        result
    }

    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath {
        let result = self.fallback.resolve_for_new_asset(asset_path);
        debug!(op = "resolve_for_new_asset", asset_path, result = %result);
        result
    }

    fn get_extension(&self, asset_path: &str) -> ResolverResult<String> {
        let location = self.location_or_original(asset_path)?;
        let result = self.fallback.get_extension(&location)?;
        debug!(op = "get_extension", asset_path, location = %location, result = %result);
        Ok(result)
    }

    fn get_asset_info(&self, asset_path: &str, resolved_path: &ResolvedPath) -> AssetInfo {
        let result = self.fallback.get_asset_info(asset_path, resolved_path);
        debug!(
            op = "get_asset_info",
            asset_path,
            resolved_path = %resolved_path,
            asset_name = %result.asset_name,
            repo_path = %result.repo_path
        );
        result
    }

    fn get_modification_timestamp(&self, asset_path: &str, resolved_path: &ResolvedPath) -> Timestamp {
        let result = if self.is_managed(asset_path) {
            Timestamp::EPOCH
        } else {
            self.fallback.get_modification_timestamp(asset_path, resolved_path)
        };
        debug!(
            op = "get_modification_timestamp",
            asset_path,
            resolved_path = %resolved_path,
            result = ?result.secs()
        );
        result
    }

    fn open_asset(&self, resolved_path: &ResolvedPath) -> ResolverResult<Arc<dyn Asset>> {
        let location = ResolvedPath::new(self.location_or_original(resolved_path.as_str())?);
        let result = self.fallback.open_asset(&location);
        debug!(
            op = "open_asset",
            resolved_path = %resolved_path,
            location = %location,
            ok = result.is_ok()
        );
        result
    }

    fn can_write_asset_to_path(&self, resolved_path: &ResolvedPath, why_not: Option<&mut String>) -> bool {
        let result = self.fallback.can_write_asset_to_path(resolved_path, why_not);
        debug!(op = "can_write_asset_to_path", resolved_path = %resolved_path, result);
        result
    }

    fn open_asset_for_write(
        &self,
        resolved_path: &ResolvedPath,
        write_mode: WriteMode,
    ) -> ResolverResult<Arc<dyn WritableAsset>> {
        let result = self.fallback.open_asset_for_write(resolved_path, write_mode);
        debug!(
            op = "open_asset_for_write",
            resolved_path = %resolved_path,
            ?write_mode,
            ok = result.is_ok()
        );
        result
    }
}
