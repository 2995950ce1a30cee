use serde::{Deserialize, Serialize};

/// What the ingestor decided for one signal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalOutcome {
    /// VALIDATION — heat was applied to the message.
    Applied,
    /// CORRECTION — the signal was suppressed (poison pill).
    Suppressed,
    /// NEUTRAL — evaluated, no mutation.
    Neutral,
    /// The snippet did not reappear in the user text; not evaluated.
    NotTriggered,
}

/// Per-signal ingestion result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalDisposition {
    pub message_id: String,
    pub start: usize,
    pub end: usize,
    pub outcome: SignalOutcome,
}
