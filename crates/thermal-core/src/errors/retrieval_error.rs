/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// An anchor points at a message the store no longer knows.
    /// Data-integrity violation — surfaced, never silently skipped.
    #[error("anchor {anchor_id} references missing message {message_id}")]
    DanglingAnchorReference {
        anchor_id: String,
        message_id: String,
    },
}
