use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::HeatError;

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A character-offset interval marked hot on a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatRange {
    pub start: usize,
    pub end: usize,
}

impl HeatRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Characters covered by this range, ignoring any overlap with others.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One conversation turn. Content and embedding are immutable after
/// creation; heat ranges are append-only through the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// UUID v4 identifier.
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Content embedding, fixed dimension, set at creation.
    pub embedding: Vec<f32>,
    /// The heatmap: hot intervals over the content's character offsets.
    pub heat_ranges: Vec<HeatRange>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            embedding,
            heat_ranges: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Content length in characters, not bytes. Heat offsets are
    /// character offsets, so multi-byte content must not be measured
    /// with `str::len`.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Append a heat range after validating bounds:
    /// `0 <= start <= end <= char_len`.
    pub fn try_add_range(&mut self, start: usize, end: usize) -> Result<(), HeatError> {
        let len = self.char_len();
        if start > end || end > len {
            return Err(HeatError::RangeOutOfBounds { start, end, len });
        }
        self.heat_ranges.push(HeatRange::new(start, end));
        Ok(())
    }
}

/// Identity equality: two messages are equal if they have the same ID.
/// Content comparison is not what callers mean when they compare turns.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
