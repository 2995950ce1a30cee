use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-bounded suppression of heat over a character span.
///
/// Registered when a poison pill invalidates a prior signal: the span
/// stays in the message's heat ranges, but density calculations exclude
/// the cooled characters until the interval expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoolingInterval {
    pub start: usize,
    pub end: usize,
    pub expires_at: DateTime<Utc>,
}

impl CoolingInterval {
    pub fn new(start: usize, end: usize, expires_at: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            expires_at,
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Characters of `[start, end)` covered by this interval.
    pub fn overlap_chars(&self, start: usize, end: usize) -> usize {
        let lo = self.start.max(start);
        let hi = self.end.min(end);
        hi.saturating_sub(lo)
    }
}
