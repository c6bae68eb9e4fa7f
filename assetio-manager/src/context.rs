//! Calling context passed alongside manager queries.

use serde::{Deserialize, Serialize};

/// Whether the caller intends to read or write the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

/// How long the manager may expect the caller to hold on to results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
    Ignored,
    Transient,
    Session,
    Permanent,
}

/// Immutable query context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    pub access: Access,
    pub retention: Retention,
}

impl Context {
    #[must_use]
    pub const fn new(access: Access, retention: Retention) -> Self {
        Self { access, retention }
    }

    /// Read access, results discarded straight after use.
    #[must_use]
    pub const fn read_transient() -> Self {
        Self::new(Access::Read, Retention::Transient)
    }
}
