//! Maps managed entity references to concrete file locations.

use crate::error::ResolverResult;
use assetio_manager::{Context, LocatableContent, Manager, TraitSet};
use tracing::{debug, warn};

const FILE_URL_PREFIX: &str = "file://";

/// Queries the manager for the `content.LocatableContent` location of a
/// reference.
///
/// The context and trait set are built once and reused for every query.
/// Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct LocationLookup {
    manager: Manager,
    context: Context,
    traits: TraitSet,
}

impl LocationLookup {
    pub fn new(manager: Manager) -> Self {
        Self {
            manager,
            context: Context::read_transient(),
            traits: LocatableContent::trait_set(),
        }
    }

    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// The filesystem location for `identifier`.
    ///
    /// `Ok(None)` when `identifier` is not a managed reference, or when the
    /// manager has no location for it. A failed query is an error.
    pub fn locate(&self, identifier: &str) -> ResolverResult<Option<String>> {
        let Some(reference) = self.manager.create_entity_reference_if_valid(identifier) else {
            return Ok(None);
        };

        let data = self
            .manager
            .resolve_one(&reference, &self.traits, &self.context)?;

        let Some(url) = LocatableContent::new(&data).location() else {
            debug!(reference = %reference, "Entity has no location");
            return Ok(None);
        };

        Ok(Some(url_to_path(url)))
    }
}

/// Strips the `file://` scheme. Other values are passed through unchanged.
fn url_to_path(url: &str) -> String {
    match url.strip_prefix(FILE_URL_PREFIX) {
        Some(path) => path.to_string(),
        None => {
            warn!(location = url, "Entity location is not a file:// URL, using it verbatim");
            url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_file_scheme() {
        assert_eq!(url_to_path("file:///shared/assets/model.usd"), "/shared/assets/model.usd");
    }

    #[test]
    fn keeps_other_values() {
        assert_eq!(url_to_path("/already/a/path.usd"), "/already/a/path.usd");
        assert_eq!(url_to_path("https://host/x.usd"), "https://host/x.usd");
    }
}
