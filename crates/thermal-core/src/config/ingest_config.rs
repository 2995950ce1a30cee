use serde::{Deserialize, Serialize};

use super::defaults;

/// How a confirmed (VALIDATION) signal's heat is applied.
///
/// The boost magnitude is an explicit policy rather than a hidden
/// formula, so callers can see exactly what a confirmation does.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoostPolicy {
    /// Append the signal's own character range as a new heat range.
    AppendSignalRange,
}

impl Default for BoostPolicy {
    fn default() -> Self {
        Self::AppendSignalRange
    }
}

/// How a contradicted (CORRECTION) signal is suppressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoolingPolicy {
    /// Minimum behavior: ignore the signal, no store mutation.
    Drop,
    /// Register a cooling interval so density excludes the span
    /// for `secs` seconds.
    TimedExclusion { secs: u64 },
}

impl Default for CoolingPolicy {
    fn default() -> Self {
        Self::TimedExclusion {
            secs: defaults::DEFAULT_COOLING_SECS,
        }
    }
}

/// Ingestion subsystem configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub boost_policy: BoostPolicy,
    pub cooling_policy: CoolingPolicy,
}
