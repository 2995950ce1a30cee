/// Signal ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A signal referenced a message the store does not hold.
    #[error("signal targets unknown message {message_id}")]
    UnknownSignalTarget { message_id: String },
}
