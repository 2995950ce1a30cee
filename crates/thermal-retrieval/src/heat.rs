//! Heat density: what fraction of a message's content is "hot".
//!
//! Overlapping or repeated ranges are summed without deduplication, so a
//! span highlighted twice accumulates density faster than its true
//! character coverage. This is deliberate; replacing it with
//! interval-merging math is a behavior change that needs a new test
//! baseline, not a drive-by fix.

use chrono::{DateTime, Utc};

use thermal_core::models::{CoolingInterval, Message};

/// Fraction of the message covered by heat ranges, capped at 1.0.
/// Zero for a message with no ranges or empty content.
pub fn heat_density(message: &Message) -> f64 {
    if message.heat_ranges.is_empty() {
        return 0.0;
    }
    let len = message.char_len();
    if len == 0 {
        return 0.0;
    }
    let hot_chars: usize = message.heat_ranges.iter().map(|r| r.len()).sum();
    (hot_chars as f64 / len as f64).min(1.0)
}

/// Like [`heat_density`], but each range's contribution is reduced by its
/// character overlap with cooling intervals still active at `now`.
/// With no active cooling this is identical to [`heat_density`].
pub fn effective_density(
    message: &Message,
    cooling: &[CoolingInterval],
    now: DateTime<Utc>,
) -> f64 {
    if message.heat_ranges.is_empty() {
        return 0.0;
    }
    let len = message.char_len();
    if len == 0 {
        return 0.0;
    }
    let active: Vec<&CoolingInterval> = cooling.iter().filter(|c| c.is_active(now)).collect();
    let hot_chars: usize = message
        .heat_ranges
        .iter()
        .map(|r| {
            let cooled: usize = active.iter().map(|c| c.overlap_chars(r.start, r.end)).sum();
            r.len().saturating_sub(cooled)
        })
        .sum();
    (hot_chars as f64 / len as f64).min(1.0)
}
