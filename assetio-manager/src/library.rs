//! JSON asset library manager.
//!
//! Entities live in a JSON file:
//!
//! ```json
//! {
//!   "entities": {
//!     "cube": {
//!       "traits": {
//!         "content.LocatableContent": { "location": "file://${library_dir}/cube.usd" }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! References take the form `<scheme>:///<entity name>`. `${library_dir}`
//! in string properties expands to the directory holding the library.

use crate::context::{Access, Context};
use crate::error::{BatchElementError, ErrorCode, ManagerError, ManagerResult};
use crate::factory::ManagerImplementationFactory;
use crate::manager::{ManagerInterface, ManagerSettings};
use crate::reference::EntityReference;
use crate::traits::{PropertyValue, TraitSet, TraitsData};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LIBRARY_MANAGER_ID: &str = "assetio.manager.library";

const DEFAULT_SCHEME: &str = "bal";
const LIBRARY_PATH_KEY: &str = "library_path";
const SCHEME_KEY: &str = "entity_reference_url_scheme";
const LIBRARY_DIR_VAR: &str = "${library_dir}";

#[derive(Debug, Default, Deserialize)]
struct Library {
    #[serde(default)]
    entities: BTreeMap<String, LibraryEntity>,
}

#[derive(Debug, Default, Deserialize)]
struct LibraryEntity {
    #[serde(default)]
    traits: TraitsData,
}

/// Read-only manager serving entities from a JSON library file.
#[derive(Debug)]
pub struct LibraryManager {
    prefix: String,
    library: Library,
    library_path: Option<PathBuf>,
}

impl LibraryManager {
    /// An uninitialized manager with an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: reference_prefix(DEFAULT_SCHEME),
            library: Library::default(),
            library_path: None,
        }
    }

    /// Path of the loaded library, once initialized.
    #[must_use]
    pub fn library_path(&self) -> Option<&Path> {
        self.library_path.as_deref()
    }

    /// Number of entities in the loaded library.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.library.entities.len()
    }

    fn load_library(path: &Path) -> ManagerResult<Library> {
        let contents = std::fs::read_to_string(path).map_err(|e| ManagerError::Library {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let mut library: Library =
            serde_json::from_str(&contents).map_err(|e| ManagerError::Library {
                path: path.to_path_buf(),
                detail: e.to_string(),
            })?;

        let dir = path.parent().map(Path::to_string_lossy).unwrap_or_default();
        for entity in library.entities.values_mut() {
            entity.traits.for_each_str_mut(|s| {
                if s.contains(LIBRARY_DIR_VAR) {
                    *s = s.replace(LIBRARY_DIR_VAR, &dir);
                }
            });
        }
        Ok(library)
    }

    fn resolve_entity(
        &self,
        reference: &EntityReference,
        traits: &TraitSet,
        context: &Context,
    ) -> Result<TraitsData, BatchElementError> {
        if context.access == Access::Write {
            return Err(BatchElementError::new(
                ErrorCode::EntityAccessError,
                "Entity access is read-only",
            ));
        }
        let name = reference.as_str().strip_prefix(&self.prefix).ok_or_else(|| {
            BatchElementError::new(
                ErrorCode::InvalidEntityReference,
                format!("'{reference}' is not a library reference"),
            )
        })?;
        if name.is_empty() {
            return Err(BatchElementError::new(
                ErrorCode::MalformedEntityReference,
                format!("'{reference}' names no entity"),
            ));
        }
        let entity = self.library.entities.get(name).ok_or_else(|| {
            BatchElementError::new(
                ErrorCode::EntityResolutionError,
                format!("Entity '{name}' not found"),
            )
        })?;
        Ok(entity.traits.filtered(traits))
    }
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagerInterface for LibraryManager {
    fn identifier(&self) -> &str {
        LIBRARY_MANAGER_ID
    }

    fn display_name(&self) -> &str {
        "Asset Library (JSON)"
    }

    fn initialize(&mut self, settings: &ManagerSettings) -> ManagerResult<()> {
        let library_path = string_setting(settings, LIBRARY_PATH_KEY)?.ok_or_else(|| {
            ManagerError::InvalidSetting {
                key: LIBRARY_PATH_KEY.to_string(),
                detail: "required".to_string(),
            }
        })?;
        let scheme = string_setting(settings, SCHEME_KEY)?.unwrap_or(DEFAULT_SCHEME);
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
            return Err(ManagerError::InvalidSetting {
                key: SCHEME_KEY.to_string(),
                detail: format!("'{scheme}' is not a valid URL scheme"),
            });
        }

        let path = PathBuf::from(library_path);
        self.library = Self::load_library(&path)?;
        self.prefix = reference_prefix(scheme);
        debug!(
            path = %path.display(),
            entities = self.library.entities.len(),
            "Loaded asset library"
        );
        self.library_path = Some(path);
        Ok(())
    }

    fn is_entity_reference_string(&self, candidate: &str) -> bool {
        candidate.starts_with(&self.prefix)
    }

    fn resolve(
        &self,
        references: &[EntityReference],
        traits: &TraitSet,
        context: &Context,
        on_success: &mut dyn FnMut(usize, TraitsData),
        on_error: &mut dyn FnMut(usize, BatchElementError),
    ) {
        for (idx, reference) in references.iter().enumerate() {
            match self.resolve_entity(reference, traits, context) {
                Ok(data) => on_success(idx, data),
                Err(err) => on_error(idx, err),
            }
        }
    }
}

/// Instantiates [`LibraryManager`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryManagerFactory;

impl ManagerImplementationFactory for LibraryManagerFactory {
    fn identifiers(&self) -> Vec<String> {
        vec![LIBRARY_MANAGER_ID.to_string()]
    }

    fn instantiate(&self, identifier: &str) -> ManagerResult<Box<dyn ManagerInterface>> {
        if identifier != LIBRARY_MANAGER_ID {
            return Err(ManagerError::ManagerNotFound(identifier.to_string()));
        }
        Ok(Box::new(LibraryManager::new()))
    }
}

fn reference_prefix(scheme: &str) -> String {
    format!("{scheme}:///")
}

fn string_setting<'a>(settings: &'a ManagerSettings, key: &str) -> ManagerResult<Option<&'a str>> {
    match settings.get(key) {
        None => Ok(None),
        Some(PropertyValue::Str(s)) => Ok(Some(s)),
        Some(other) => Err(ManagerError::InvalidSetting {
            key: key.to_string(),
            detail: format!("expected a string, got {other:?}"),
        }),
    }
}
