//! Resolver configuration.
//!
//! [`ResolverConfig::from_env`] is the only place the process environment
//! is read. Everything downstream takes the config value explicitly.

use crate::error::{ResolverError, ResolverResult};
use assetio_manager::{DEFAULT_CONFIG_ENV_VAR, Severity, SeverityFilter};
use std::ffi::OsString;
use std::path::PathBuf;

/// Platform path list of extra directories searched for bare relative paths.
pub const SEARCH_PATH_ENV_VAR: &str = "ASSETIO_DEFAULT_SEARCH_PATH";

/// Minimum manager log severity, numeric (0-6) or by name.
pub const LOGGING_SEVERITY_ENV_VAR: &str = "OPENASSETIO_LOGGING_SEVERITY";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Default manager config file, from `OPENASSETIO_DEFAULT_CONFIG`.
    pub manager_config: Option<PathBuf>,
    pub search_paths: Vec<PathBuf>,
    pub log_severity: Severity,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            manager_config: None,
            search_paths: Vec::new(),
            log_severity: SeverityFilter::DEFAULT_SEVERITY,
        }
    }
}

impl ResolverConfig {
    /// Reads the process environment.
    pub fn from_env() -> ResolverResult<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds a config from an arbitrary variable lookup. Unset and empty
    /// variables are treated alike.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> ResolverResult<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let manager_config = var(DEFAULT_CONFIG_ENV_VAR).map(PathBuf::from);

        let search_paths = var(SEARCH_PATH_ENV_VAR)
            .map(|paths| {
                std::env::split_paths(&paths)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let log_severity = match var(LOGGING_SEVERITY_ENV_VAR) {
            None => SeverityFilter::DEFAULT_SEVERITY,
            Some(value) => value
                .to_string_lossy()
                .parse::<Severity>()
                .map_err(|detail| ResolverError::InvalidEnv {
                    var: LOGGING_SEVERITY_ENV_VAR,
                    detail,
                })?,
        };

        Ok(Self {
            manager_config,
            search_paths,
            log_severity,
        })
    }
}
