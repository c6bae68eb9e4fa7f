//! Asset management service surface for the assetio resolver.
//!
//! Hosts talk to an asset manager through a shared [`Manager`] handle that
//! wraps a [`ManagerInterface`] implementation. Only three capabilities are
//! consumed by the resolver: classifying a string as an entity reference,
//! validating it into an [`EntityReference`], and resolving references to
//! trait data in batches with per-element success or error callbacks.
//!
//! Managers are discovered through a TOML default config (see
//! [`DEFAULT_CONFIG_ENV_VAR`]) and instantiated by a
//! [`ManagerImplementationFactory`]. A JSON-backed [`LibraryManager`] is
//! bundled for hosts and tests.

mod context;
mod error;
mod factory;
mod library;
mod log;
mod manager;
mod reference;
mod traits;

pub use context::{Access, Context, Retention};
pub use error::{BatchElementError, ErrorCode, ManagerError, ManagerResult};
pub use factory::{
    DEFAULT_CONFIG_ENV_VAR, HostInterface, ManagerConfig, ManagerFactory,
    ManagerImplementationFactory,
};
pub use library::{LIBRARY_MANAGER_ID, LibraryManager, LibraryManagerFactory};
pub use log::{LoggerInterface, Severity, SeverityFilter, SharedLogger, TracingLogger};
pub use manager::{Manager, ManagerInterface, ManagerSettings};
pub use reference::EntityReference;
pub use traits::{LocatableContent, PropertyValue, TraitSet, TraitsData};
