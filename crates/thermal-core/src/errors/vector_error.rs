/// Vector math precondition violations.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("dimension mismatch: expected {expected}, actual {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Zero-norm (or empty) vector — cosine similarity is undefined.
    /// Surfaced instead of letting a division by zero propagate NaN.
    #[error("degenerate vector: zero norm")]
    DegenerateVector,
}
