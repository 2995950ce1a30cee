//! Shared data model: messages, anchors, signals, cooling, and result types.

mod anchor;
mod cooling;
mod disposition;
mod heat_signal;
mod message;
mod scored_result;

pub use anchor::Anchor;
pub use cooling::CoolingInterval;
pub use disposition::{SignalDisposition, SignalOutcome};
pub use heat_signal::{HeatSignal, SignalKind};
pub use message::{HeatRange, Message, Role};
pub use scored_result::{RetrievalReason, ScoredResult};
