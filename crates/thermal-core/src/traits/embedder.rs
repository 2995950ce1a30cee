use crate::errors::ThermalResult;

/// Embedding generation provider.
///
/// The engine assumes nothing about vector semantics beyond a fixed
/// dimension and that cosine similarity over the vectors is meaningful.
pub trait IEmbedder: Send + Sync {
    /// Embed a single text. Fails with `ProviderError::EmbeddingFailed`.
    fn embed(&self, text: &str) -> ThermalResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
