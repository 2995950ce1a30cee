use crate::errors::ThermalResult;
use crate::models::Anchor;

/// Anchor store. Anchors are created once and never mutated.
pub trait IAnchorStore: Send + Sync {
    fn create(&self, anchor: Anchor) -> ThermalResult<()>;

    fn get(&self, id: &str) -> ThermalResult<Option<Anchor>>;

    /// Enumerate all anchors in stable (insertion) order.
    fn all(&self) -> ThermalResult<Vec<Anchor>>;
}
