//! Intent of a user message relative to a quoted snippet.
//!
//! Produced by the external classifier as a free-form label; the ingestor
//! maps labels through [`Intent::from_label`] so that anything the
//! classifier emits outside the known set degrades to `Neutral`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// The user contradicts the quoted snippet ("poison pill").
    Correction,
    /// The user confirms the quoted snippet is what they wanted.
    Validation,
    /// Neither — or an unrecognized classifier label.
    Neutral,
}

impl Intent {
    /// Map a raw classifier label to an intent.
    /// Unrecognized labels are neutral by contract, never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "CORRECTION" => Self::Correction,
            "VALIDATION" => Self::Validation,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correction => "CORRECTION",
            Self::Validation => "VALIDATION",
            Self::Neutral => "NEUTRAL",
        }
    }
}
