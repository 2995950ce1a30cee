//! RetrievalEngine: the two-phase hybrid pipeline.
//!
//! Phase 1 (side door): anchor label lookup — an explicit user shortcut
//! beats any vector match.
//! Phase 2 (thermal search): cosine similarity over every turn, boosted
//! by heat density, stable-sorted descending.
//!
//! The final order is the concatenation of the two phases, never a
//! global re-sort.

use chrono::Utc;
use tracing::{debug, info};

use thermal_core::config::RetrievalConfig;
use thermal_core::errors::{RetrievalError, ThermalResult};
use thermal_core::models::{Message, RetrievalReason, ScoredResult};
use thermal_core::traits::{IAnchorStore, IMessageStore};

use crate::anchor_index::AnchorIndex;
use crate::heat::effective_density;
use crate::vector::cosine_similarity;

/// The retrieval engine. Borrows the stores for the duration of a call
/// and never mutates them — retrieval is read-only by construction, so
/// cancelling an in-flight call cannot corrupt shared state.
pub struct RetrievalEngine<'a> {
    messages: &'a dyn IMessageStore,
    anchors: &'a dyn IAnchorStore,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        messages: &'a dyn IMessageStore,
        anchors: &'a dyn IAnchorStore,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            messages,
            anchors,
            config,
        }
    }

    /// Rank prior turns against a query embedding.
    ///
    /// An anchor hit is always rank 1 with the fixed anchor score and
    /// consumes one result slot; `top_k = 0` with an anchor hit still
    /// yields exactly that one result.
    pub fn retrieve(&self, query_embedding: &[f32], top_k: usize) -> ThermalResult<Vec<ScoredResult>> {
        let mut results = Vec::new();

        // --- Phase 1: anchors ---
        let index = AnchorIndex::new(self.anchors.all()?);
        let anchor_hit = index
            .best_match(query_embedding, self.config.anchor_threshold)?
            .cloned();

        let mut remaining_k = top_k;
        let mut anchored_message_id: Option<String> = None;

        if let Some(anchor) = anchor_hit {
            let message = self.messages.get(&anchor.source_message_id)?.ok_or_else(|| {
                RetrievalError::DanglingAnchorReference {
                    anchor_id: anchor.id.clone(),
                    message_id: anchor.source_message_id.clone(),
                }
            })?;
            anchored_message_id = Some(message.id.clone());
            results.push(ScoredResult {
                message,
                score: self.config.anchor_score,
                reason: RetrievalReason::Anchor(anchor.label.clone()),
            });
            remaining_k = remaining_k.saturating_sub(1);
        }

        // --- Phase 2: thermal vector search ---
        let scored = self.score_messages(query_embedding, anchored_message_id.as_deref())?;
        debug!(
            candidates = scored.len(),
            anchor_hit = anchored_message_id.is_some(),
            "thermal phase scored"
        );
        results.extend(scored.into_iter().take(remaining_k).map(|(message, score)| {
            ScoredResult {
                message,
                score,
                reason: RetrievalReason::VectorHeat,
            }
        }));

        info!(top_k, returned = results.len(), "retrieval complete");
        Ok(results)
    }

    /// Score every message except the anchor-resolved one, stable-sorted
    /// by final score descending (enumeration order preserved on ties).
    fn score_messages(
        &self,
        query_embedding: &[f32],
        exclude_id: Option<&str>,
    ) -> ThermalResult<Vec<(Message, f64)>> {
        let now = Utc::now();
        let mut scored: Vec<(Message, f64)> = Vec::new();

        for message in self.messages.all()? {
            if exclude_id == Some(message.id.as_str()) {
                continue;
            }
            let base = cosine_similarity(query_embedding, &message.embedding)?;
            let cooling = self.messages.cooling_intervals(&message.id)?;
            let density = effective_density(&message, &cooling, now);
            // Heat inflates by at most (1 + alpha); a negative base keeps
            // its sign and only moves further down the ranking.
            let final_score = base * (1.0 + self.config.heat_alpha * density);
            scored.push((message, final_score));
        }

        // Scores are finite here (degenerate vectors already errored),
        // and Vec::sort_by is stable, so exact ties keep store order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(scored)
    }
}
