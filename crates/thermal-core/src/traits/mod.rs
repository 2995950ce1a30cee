//! Collaborator interfaces the engine consumes.
//!
//! The engine holds no process-wide state; stores, embedders, and the
//! intent classifier are injected through these traits so the core is
//! testable against fakes and swappable for real backends.

mod anchor_store;
mod embedder;
mod intent_classifier;
mod message_store;

pub use anchor_store::IAnchorStore;
pub use embedder::IEmbedder;
pub use intent_classifier::IIntentClassifier;
pub use message_store::IMessageStore;
