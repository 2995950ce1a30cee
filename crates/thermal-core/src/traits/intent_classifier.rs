use crate::errors::ThermalResult;

/// External intent classifier (typically an LLM call behind the scenes).
///
/// Returns the raw label; mapping unrecognized labels to NEUTRAL is the
/// ingestor's job, not the classifier's. Implementations must be total —
/// bounded timeouts are their responsibility, and transport failure
/// surfaces as `ProviderError::ClassifierUnavailable` rather than a hang.
pub trait IIntentClassifier: Send + Sync {
    /// Classify the intent of `user_text` toward `quoted_text`.
    fn classify(&self, user_text: &str, quoted_text: &str) -> ThermalResult<String>;

    /// Human-readable classifier name.
    fn name(&self) -> &str;
}
