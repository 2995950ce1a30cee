/// Collaborator (embedder / classifier) failures.
///
/// The engine never retries these internally; retry policy belongs to the
/// caller, which owns the call context.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("intent classifier unavailable: {reason}")]
    ClassifierUnavailable { reason: String },
}
