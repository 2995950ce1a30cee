use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Thermal boost sensitivity: `final = base * (1 + heat_alpha * density)`.
    pub heat_alpha: f64,
    /// Anchors match only when label similarity strictly exceeds this.
    pub anchor_threshold: f64,
    /// Fixed score assigned to an anchor hit.
    pub anchor_score: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            heat_alpha: defaults::DEFAULT_HEAT_ALPHA,
            anchor_threshold: defaults::DEFAULT_ANCHOR_THRESHOLD,
            anchor_score: defaults::DEFAULT_ANCHOR_SCORE,
        }
    }
}
