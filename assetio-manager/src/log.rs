//! Severity-levelled logging for managers and hosts.
//!
//! Managers log through a [`LoggerInterface`]. [`TracingLogger`] forwards
//! those calls to `tracing`, and [`SeverityFilter`] drops anything below a
//! configurable level before it reaches the wrapped logger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, error, info, warn};

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    DebugApi = 0,
    Debug = 1,
    Info = 2,
    Progress = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
}

impl Severity {
    pub const ALL: [Self; 7] = [
        Self::DebugApi,
        Self::Debug,
        Self::Info,
        Self::Progress,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Maps a numeric level (0 = debugApi .. 6 = critical).
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.get(usize::from(level)).copied()
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DebugApi => "debugApi",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Progress => "progress",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the numeric level or the severity name.
impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Self::from_level(level).ok_or_else(|| format!("severity level {level} out of range 0-6"));
        }
        Self::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown severity '{s}'"))
    }
}

/// Sink for severity-levelled messages.
pub trait LoggerInterface: Send + Sync {
    fn log(&self, severity: Severity, message: &str);

    /// Whether a message at `severity` would be emitted. Callers use this
    /// to skip building expensive messages.
    fn is_severity_logged(&self, _severity: Severity) -> bool {
        true
    }

    fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    fn progress(&self, message: &str) {
        self.log(Severity::Progress, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn debug_api(&self, message: &str) {
        self.log(Severity::DebugApi, message);
    }
}

/// Logger shared between the host, the manager and the resolver.
pub type SharedLogger = Arc<dyn LoggerInterface>;

/// Routes manager log calls onto `tracing` events.
///
/// critical and error become error events (critical tagged `fatal`),
/// warning becomes a warn event, info and progress become info events,
/// and both debug levels become debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl LoggerInterface for TracingLogger {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Critical => error!(fatal = true, "{}", message),
            Severity::Error => error!(fatal = false, "{}", message),
            Severity::Warning => warn!("{}", message),
            Severity::Info => info!("{}", message),
            Severity::Progress => info!(progress = true, "{}", message),
            Severity::Debug => debug!("{}", message),
            Severity::DebugApi => debug!(api = true, "{}", message),
        }
    }
}

/// Drops messages below a minimum severity.
pub struct SeverityFilter {
    upstream: SharedLogger,
    min_severity: AtomicU8,
}

impl SeverityFilter {
    pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

    pub fn new(upstream: SharedLogger, min_severity: Severity) -> Self {
        Self {
            upstream,
            min_severity: AtomicU8::new(min_severity.level()),
        }
    }

    /// Wraps `upstream` at [`Self::DEFAULT_SEVERITY`].
    pub fn with_default_severity(upstream: SharedLogger) -> Self {
        Self::new(upstream, Self::DEFAULT_SEVERITY)
    }

    pub fn set_severity(&self, severity: Severity) {
        self.min_severity.store(severity.level(), Ordering::Relaxed);
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::from_level(self.min_severity.load(Ordering::Relaxed))
            .unwrap_or(Self::DEFAULT_SEVERITY)
    }
}

impl LoggerInterface for SeverityFilter {
    fn log(&self, severity: Severity, message: &str) {
        if self.is_severity_logged(severity) {
            self.upstream.log(severity, message);
        }
    }

    fn is_severity_logged(&self, severity: Severity) -> bool {
        severity >= self.severity()
    }
}

impl fmt::Debug for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityFilter")
            .field("min_severity", &self.severity())
            .finish_non_exhaustive()
    }
}
