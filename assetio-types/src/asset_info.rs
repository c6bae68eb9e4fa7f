//! Asset metadata and write modes.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about a resolved asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Version string, when the backing store versions assets.
    #[serde(default)]
    pub version: Option<String>,
    /// Human readable asset name.
    #[serde(default)]
    pub asset_name: String,
    /// Repository path, when distinct from the resolved path.
    #[serde(default)]
    pub repo_path: String,
    /// Resolver-specific payload.
    #[serde(default)]
    pub resolver_info: serde_json::Value,
}

/// How an asset opened for writing treats existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Keep existing bytes; writes overlay them.
    Update,
    /// Discard existing bytes.
    Replace,
}
