use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use thermal_core::errors::{StoreError, ThermalResult};
use thermal_core::models::{Anchor, CoolingInterval, Message};
use thermal_core::traits::{IAnchorStore, IMessageStore};

/// Insertion-ordered table: enumeration must be a stable sequence
/// because ranking tie-breaks depend on it.
struct Table<T> {
    order: Vec<String>,
    by_id: HashMap<String, T>,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    fn insert(&mut self, id: String, value: T) {
        if !self.by_id.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.by_id.insert(id, value);
    }
}

/// In-memory message + anchor store behind reader-writer locks.
///
/// Readers (retrieval, anchor lookup) proceed concurrently; writers
/// (heat mutation, cooling registration) are exclusive but only touch
/// the one affected entry.
pub struct InMemoryStore {
    messages: RwLock<Table<Message>>,
    anchors: RwLock<Table<Anchor>>,
    cooling: RwLock<HashMap<String, Vec<CoolingInterval>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Table::new()),
            anchors: RwLock::new(Table::new()),
            cooling: RwLock::new(HashMap::new()),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.read().expect("messages lock").order.len()
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.read().expect("anchors lock").order.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IMessageStore for InMemoryStore {
    fn create(&self, message: Message) -> ThermalResult<()> {
        debug!(message_id = %message.id, role = message.role.as_str(), "storing message");
        let mut table = self.messages.write().expect("messages lock");
        table.insert(message.id.clone(), message);
        Ok(())
    }

    fn get(&self, id: &str) -> ThermalResult<Option<Message>> {
        let table = self.messages.read().expect("messages lock");
        Ok(table.by_id.get(id).cloned())
    }

    fn append_heat_range(&self, id: &str, start: usize, end: usize) -> ThermalResult<()> {
        let mut table = self.messages.write().expect("messages lock");
        let message = table
            .by_id
            .get_mut(id)
            .ok_or_else(|| StoreError::MessageNotFound { id: id.to_string() })?;
        message.try_add_range(start, end)?;
        debug!(message_id = %id, start, end, "heat range appended");
        Ok(())
    }

    fn register_cooling(&self, id: &str, interval: CoolingInterval) -> ThermalResult<()> {
        // Validate the target exists before registering against it.
        if IMessageStore::get(self, id)?.is_none() {
            return Err(StoreError::MessageNotFound { id: id.to_string() }.into());
        }
        let mut cooling = self.cooling.write().expect("cooling lock");
        cooling.entry(id.to_string()).or_default().push(interval);
        debug!(message_id = %id, "cooling interval registered");
        Ok(())
    }

    fn cooling_intervals(&self, id: &str) -> ThermalResult<Vec<CoolingInterval>> {
        let cooling = self.cooling.read().expect("cooling lock");
        Ok(cooling.get(id).cloned().unwrap_or_default())
    }

    fn all(&self) -> ThermalResult<Vec<Message>> {
        let table = self.messages.read().expect("messages lock");
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id).cloned())
            .collect())
    }
}

impl IAnchorStore for InMemoryStore {
    fn create(&self, anchor: Anchor) -> ThermalResult<()> {
        debug!(anchor_id = %anchor.id, label = %anchor.label, "storing anchor");
        let mut table = self.anchors.write().expect("anchors lock");
        table.insert(anchor.id.clone(), anchor);
        Ok(())
    }

    fn get(&self, id: &str) -> ThermalResult<Option<Anchor>> {
        let table = self.anchors.read().expect("anchors lock");
        Ok(table.by_id.get(id).cloned())
    }

    fn all(&self) -> ThermalResult<Vec<Anchor>> {
        let table = self.anchors.read().expect("anchors lock");
        Ok(table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id).cloned())
            .collect())
    }
}
