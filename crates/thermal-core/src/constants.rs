/// Thermal engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Behavioral signal weights: evidence strength per signal kind.
pub const WEIGHT_COPY: f64 = 2.0;
pub const WEIGHT_HIGHLIGHT: f64 = 1.0;
pub const WEIGHT_HOVER: f64 = 0.1;

/// Norms below this are treated as degenerate (zero) vectors.
pub const DEGENERATE_NORM_EPSILON: f64 = f64::EPSILON;
