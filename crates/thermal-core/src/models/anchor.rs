use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-created named shortcut pointing at a message.
///
/// The embedding is computed over the *label* the user typed, never over
/// the message content — the two vectors are independent. Anchors are
/// immutable after creation and never auto-expired; they exist as long as
/// the user keeps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchor {
    /// UUID v4 identifier.
    pub id: String,
    /// Non-owning back-reference to the anchored message.
    pub source_message_id: String,
    /// The search term the user saved, e.g. "Email Validator".
    pub label: String,
    /// Embedding of the label.
    pub label_embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl Anchor {
    pub fn new(
        source_message_id: impl Into<String>,
        label: impl Into<String>,
        label_embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_message_id: source_message_id.into(),
            label: label.into(),
            label_embedding,
            created_at: Utc::now(),
        }
    }
}

/// Identity equality by ID, matching [`crate::models::Message`].
impl PartialEq for Anchor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
