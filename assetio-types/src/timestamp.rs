//! Asset modification timestamps.
//!
//! A timestamp is a count of seconds since the Unix epoch. Two values are
//! distinguished:
//! - the invalid timestamp, returned when no modification time is known
//! - the epoch sentinel, returned for assets whose content is treated as
//!   never changing

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, or invalid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timestamp {
    secs: Option<f64>,
}

impl Timestamp {
    /// Epoch zero. Constant across queries so timestamp-keyed caches never
    /// consider the asset stale.
    pub const EPOCH: Self = Self { secs: Some(0.0) };

    /// Creates a timestamp from seconds since the epoch.
    ///
    /// Non-finite or negative values are rejected.
    pub fn from_secs(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(Error::InvalidTimestamp(format!("{secs} is not a valid time")));
        }
        Ok(Self { secs: Some(secs) })
    }

    /// A timestamp carrying no time.
    #[must_use]
    pub const fn invalid() -> Self {
        Self { secs: None }
    }

    /// Converts a filesystem time.
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        let since = time
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::InvalidTimestamp(format!("time before Unix epoch: {e}")))?;
        Ok(Self {
            secs: Some(since.as_secs_f64()),
        })
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.secs.is_some()
    }

    /// Seconds since the epoch, if valid.
    #[must_use]
    pub const fn secs(&self) -> Option<f64> {
        self.secs
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::invalid()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        match (self.secs, other.secs) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Invalid timestamps are unordered, including against each other.
impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.secs, other.secs) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }
}
