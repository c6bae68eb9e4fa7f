//! Resolved asset paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The concrete location of an asset as produced by a resolver.
///
/// An empty value means resolution failed. Managed entity references may
/// also travel inside a `ResolvedPath` untouched; later operations map
/// them to a concrete location on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// Wraps a path string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The empty (unresolved) path.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Views the path as a filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResolvedPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for ResolvedPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
