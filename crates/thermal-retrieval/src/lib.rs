//! # thermal-retrieval
//!
//! The hybrid retrieval pipeline: anchor lookup (the "side door") followed
//! by a heat-boosted vector scan over all conversation turns.
//!
//! - [`vector`] — cosine similarity with typed precondition errors
//! - [`heat`] — heat density and cooling-aware effective density
//! - [`anchor_index`] — best-match label lookup with a strict threshold
//! - [`engine`] — the two-phase [`engine::RetrievalEngine`]

pub mod anchor_index;
pub mod engine;
pub mod heat;
pub mod vector;

pub use anchor_index::AnchorIndex;
pub use engine::RetrievalEngine;
