use serde::{Deserialize, Serialize};

use super::message::Message;

/// Why a message made it into the result list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "label")]
#[serde(rename_all = "snake_case")]
pub enum RetrievalReason {
    /// Matched a user anchor by label similarity.
    Anchor(String),
    /// Vector similarity with thermal boost applied.
    VectorHeat,
}

impl std::fmt::Display for RetrievalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anchor(label) => write!(f, "anchor:{}", label),
            Self::VectorHeat => write!(f, "vector+heat"),
        }
    }
}

/// One ranked retrieval hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub message: Message,
    pub score: f64,
    pub reason: RetrievalReason,
}
