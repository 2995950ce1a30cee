//! # thermal-store
//!
//! In-memory reference implementation of `IMessageStore` and
//! `IAnchorStore`: retrieval takes shared read access, heat mutations
//! take exclusive access and touch a single message entry.
//! Swap in a real database behind the same traits for persistence.

mod engine;

pub use engine::InMemoryStore;
