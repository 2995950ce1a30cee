//! Engine configuration, deserializable from TOML.

mod defaults;
mod ingest_config;
mod retrieval_config;

pub use ingest_config::{BoostPolicy, CoolingPolicy, IngestConfig};
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ThermalResult;

/// Umbrella configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    pub retrieval: RetrievalConfig,
    pub ingest: IngestConfig,
}

impl ThermalConfig {
    /// Parse from a TOML document. Missing sections and fields take
    /// their defaults.
    pub fn from_toml_str(s: &str) -> ThermalResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
