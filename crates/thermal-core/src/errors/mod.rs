//! Error taxonomy for the thermal engine.
//!
//! Each subsystem has its own error enum; `ThermalError` wraps them all so
//! callers can hold a single error type across subsystem boundaries.
//! No failure is ever coerced into a degraded score — a vector comparison
//! that cannot be computed is an error, not a 0.0 similarity.

mod heat_error;
mod ingest_error;
mod provider_error;
mod retrieval_error;
mod store_error;
mod vector_error;

pub use heat_error::HeatError;
pub use ingest_error::IngestError;
pub use provider_error::ProviderError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;
pub use vector_error::VectorError;

/// Workspace-wide result alias.
pub type ThermalResult<T> = Result<T, ThermalError>;

/// Top-level error wrapping all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ThermalError {
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),

    #[error("heat error: {0}")]
    Heat(#[from] HeatError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
