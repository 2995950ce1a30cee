use crate::errors::ThermalResult;
use crate::models::{CoolingInterval, Message};

/// Message store: CRUD plus the two heat mutation hooks.
///
/// `all()` must return a stable ordered sequence for the duration of a
/// single retrieval call — tie-breaks in ranking depend on enumeration
/// order being reproducible.
pub trait IMessageStore: Send + Sync {
    fn create(&self, message: Message) -> ThermalResult<()>;

    fn get(&self, id: &str) -> ThermalResult<Option<Message>>;

    /// Append a heat range to a message. Bounds are validated against
    /// the message's character length; fails with
    /// `HeatError::RangeOutOfBounds` or `StoreError::MessageNotFound`.
    fn append_heat_range(&self, id: &str, start: usize, end: usize) -> ThermalResult<()>;

    /// Register a cooling interval for a message (poison pill hook).
    fn register_cooling(&self, id: &str, interval: CoolingInterval) -> ThermalResult<()>;

    /// Cooling intervals currently registered for a message, active or not.
    fn cooling_intervals(&self, id: &str) -> ThermalResult<Vec<CoolingInterval>>;

    /// Enumerate all messages in stable (insertion) order.
    fn all(&self) -> ThermalResult<Vec<Message>>;
}
