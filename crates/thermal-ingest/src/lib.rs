//! # thermal-ingest
//!
//! Turns proposed behavioral signals into heat mutations — or poisons
//! them. When the user's next message quotes a previously-signaled
//! snippet, the external intent classifier decides whether that quote
//! confirms the snippet (heat applied) or corrects it (heat suppressed
//! via cooling).

mod ingestor;

pub use ingestor::SignalIngestor;
