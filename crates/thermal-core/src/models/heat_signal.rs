use serde::{Deserialize, Serialize};

use crate::constants::{WEIGHT_COPY, WEIGHT_HIGHLIGHT, WEIGHT_HOVER};

/// Kind of behavioral event the frontend observed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Hover,
    Highlight,
    Copy,
}

impl SignalKind {
    /// Lossy wire parse: unrecognized kinds carry the same evidence
    /// weight as a hover, so they map to `Hover` instead of failing.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "copy" => Self::Copy,
            "highlight" => Self::Highlight,
            _ => Self::Hover,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Highlight => "highlight",
            Self::Copy => "copy",
        }
    }

    /// Evidence weight: copying is strong interest, hovering barely any.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Copy => WEIGHT_COPY,
            Self::Highlight => WEIGHT_HIGHLIGHT,
            Self::Hover => WEIGHT_HOVER,
        }
    }
}

/// One behavioral event proposed as heat evidence.
///
/// Transient input to the ingestor — not persisted as its own entity.
/// A signal is only allowed to mutate a message's heat ranges after the
/// ingestor has evaluated it against new user text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatSignal {
    /// Target message.
    pub message_id: String,
    /// The literal selected text; the ingestion trigger checks whether
    /// this reappears verbatim in new user input.
    pub snippet: String,
    /// Character range of the selection within the message content.
    pub start: usize,
    pub end: usize,
    pub kind: SignalKind,
}

impl HeatSignal {
    pub fn weight(&self) -> f64 {
        self.kind.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_match_signal_strength() {
        assert_eq!(SignalKind::Copy.weight(), 2.0);
        assert_eq!(SignalKind::Highlight.weight(), 1.0);
        assert_eq!(SignalKind::Hover.weight(), 0.1);
    }

    #[test]
    fn wire_parse_is_lossy_toward_hover() {
        assert_eq!(SignalKind::from_wire("copy"), SignalKind::Copy);
        assert_eq!(SignalKind::from_wire("highlight"), SignalKind::Highlight);
        assert_eq!(SignalKind::from_wire("hover"), SignalKind::Hover);
        assert_eq!(SignalKind::from_wire("double_click"), SignalKind::Hover);
        // Unknown kinds still carry the 0.1 fallback weight.
        assert_eq!(SignalKind::from_wire("double_click").weight(), 0.1);
    }
}
