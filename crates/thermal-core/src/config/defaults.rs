/// Thermal boost sensitivity: heat can inflate a match by up to 50%.
pub const DEFAULT_HEAT_ALPHA: f64 = 0.5;

/// Minimum label similarity for an anchor match (strict).
pub const DEFAULT_ANCHOR_THRESHOLD: f64 = 0.85;

/// Fixed score for an anchor hit, above any achievable vector score.
pub const DEFAULT_ANCHOR_SCORE: f64 = 2.0;

/// How long a poison pill keeps a span cooled (seconds).
pub const DEFAULT_COOLING_SECS: u64 = 900;
