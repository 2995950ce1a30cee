//! # thermal-core
//!
//! Foundation crate for the thermal retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ThermalConfig;
pub use errors::{ThermalError, ThermalResult};
pub use intent::Intent;
pub use models::{Anchor, CoolingInterval, HeatRange, HeatSignal, Message, Role, SignalKind};
