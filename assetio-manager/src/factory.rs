//! Manager discovery from a TOML default config.
//!
//! The config file is named by [`DEFAULT_CONFIG_ENV_VAR`]:
//!
//! ```toml
//! [manager]
//! identifier = "assetio.manager.library"
//!
//! [manager.settings]
//! library_path = "${config_dir}/library.json"
//! ```
//!
//! `${config_dir}` in string settings expands to the directory holding the
//! config file.

use crate::error::{ManagerError, ManagerResult};
use crate::log::SharedLogger;
use crate::manager::{Manager, ManagerInterface, ManagerSettings};
use crate::traits::PropertyValue;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Environment variable naming the default manager config file.
pub const DEFAULT_CONFIG_ENV_VAR: &str = "OPENASSETIO_DEFAULT_CONFIG";

const CONFIG_DIR_VAR: &str = "${config_dir}";

/// Describes the host application to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInterface {
    pub identifier: String,
    pub display_name: String,
}

impl HostInterface {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// Produces manager implementations by identifier.
pub trait ManagerImplementationFactory: Send + Sync {
    /// Identifiers of every manager this factory can instantiate.
    fn identifiers(&self) -> Vec<String>;

    fn instantiate(&self, identifier: &str) -> ManagerResult<Box<dyn ManagerInterface>>;
}

/// The `[manager]` section of a default config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManagerConfig {
    pub identifier: String,
    #[serde(default)]
    pub settings: ManagerSettings,
}

#[derive(Deserialize)]
struct ConfigFile {
    manager: ManagerConfig,
}

impl ManagerConfig {
    /// Reads and parses a config file, expanding `${config_dir}`.
    pub fn load(path: &Path) -> ManagerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManagerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&contents, &config_dir).map_err(|source| ManagerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses config text, expanding `${config_dir}` to `config_dir`.
    pub fn parse(contents: &str, config_dir: &Path) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        let mut config = file.manager;
        let dir = config_dir.to_string_lossy();
        for value in config.settings.values_mut() {
            if let PropertyValue::Str(s) = value {
                if s.contains(CONFIG_DIR_VAR) {
                    *s = s.replace(CONFIG_DIR_VAR, &dir);
                }
            }
        }
        Ok(config)
    }
}

/// Builds [`Manager`] handles.
pub struct ManagerFactory;

impl ManagerFactory {
    /// Creates the default manager described by the config at
    /// `config_path`.
    ///
    /// Returns `Ok(None)` when no config path is supplied.
    pub fn default_manager_for_interface(
        config_path: Option<&Path>,
        host: &HostInterface,
        factory: &dyn ManagerImplementationFactory,
        logger: SharedLogger,
    ) -> ManagerResult<Option<Manager>> {
        let Some(path) = config_path else {
            logger.debug_api(&format!(
                "{DEFAULT_CONFIG_ENV_VAR} not set, no default manager for '{}'",
                host.identifier
            ));
            return Ok(None);
        };
        logger.debug_api(&format!("Loading default manager config from {}", path.display()));
        let config = ManagerConfig::load(path)?;
        Self::create_manager(&config, host, factory, logger).map(Some)
    }

    /// Instantiates and initializes the manager named in `config`.
    pub fn create_manager(
        config: &ManagerConfig,
        host: &HostInterface,
        factory: &dyn ManagerImplementationFactory,
        logger: SharedLogger,
    ) -> ManagerResult<Manager> {
        if !factory.identifiers().iter().any(|id| id == &config.identifier) {
            return Err(ManagerError::ManagerNotFound(config.identifier.clone()));
        }

        let mut interface = factory.instantiate(&config.identifier)?;
        interface.initialize(&config.settings)?;
        logger.debug_api(&format!(
            "Initialized manager '{}' ({}) for host '{}'",
            interface.identifier(),
            interface.display_name(),
            host.display_name
        ));
        Ok(Manager::new(Arc::from(interface), logger))
    }
}
