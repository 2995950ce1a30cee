//! Anchor lookup: does the query match something the user explicitly saved?

use tracing::debug;

use thermal_core::errors::VectorError;
use thermal_core::models::Anchor;

use crate::vector::cosine_similarity;

/// A per-call snapshot of all anchors, scanned linearly.
///
/// Linear scan is fine at this design scale; any future index must
/// preserve the strict threshold and first-seen tie-break exactly.
pub struct AnchorIndex {
    anchors: Vec<Anchor>,
}

impl AnchorIndex {
    pub fn new(anchors: Vec<Anchor>) -> Self {
        Self { anchors }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// The anchor whose label embedding is most similar to the query,
    /// but only if that similarity strictly exceeds `threshold`.
    ///
    /// On exact score ties the first anchor encountered wins (strict `>`
    /// while scanning), keeping results reproducible across calls.
    pub fn best_match(
        &self,
        query_embedding: &[f32],
        threshold: f64,
    ) -> Result<Option<&Anchor>, VectorError> {
        let mut best: Option<(&Anchor, f64)> = None;
        for anchor in &self.anchors {
            let score = cosine_similarity(query_embedding, &anchor.label_embedding)?;
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((anchor, score)),
            }
        }
        match best {
            Some((anchor, score)) if score > threshold => {
                debug!(anchor_id = %anchor.id, label = %anchor.label, score, "anchor matched");
                Ok(Some(anchor))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{anchor, basis, tilted};

    const THRESHOLD: f64 = 0.85;

    #[test]
    fn empty_index_matches_nothing() {
        let index = AnchorIndex::new(vec![]);
        assert!(index.best_match(&basis(4, 0), THRESHOLD).unwrap().is_none());
    }

    #[test]
    fn similarity_above_threshold_matches() {
        let index = AnchorIndex::new(vec![anchor("m1", "Email Validator", basis(8, 0))]);
        let query = tilted(8, 0, 1, 0.9);
        let hit = index.best_match(&query, THRESHOLD).unwrap().unwrap();
        assert_eq!(hit.label, "Email Validator");
    }

    #[test]
    fn similarity_exactly_at_threshold_does_not_match() {
        // Identical vectors score exactly 1.0; with threshold 1.0 the
        // strict comparison must reject the hit.
        let index = AnchorIndex::new(vec![anchor("m1", "Exact", basis(8, 0))]);
        assert!(index.best_match(&basis(8, 0), 1.0).unwrap().is_none());
    }

    #[test]
    fn similarity_below_threshold_does_not_match() {
        let index = AnchorIndex::new(vec![anchor("m1", "Weak", basis(8, 0))]);
        let query = tilted(8, 0, 1, 0.8);
        assert!(index.best_match(&query, THRESHOLD).unwrap().is_none());
    }

    #[test]
    fn highest_scoring_anchor_wins() {
        let index = AnchorIndex::new(vec![
            anchor("m1", "Close", tilted(8, 0, 1, 0.9)),
            anchor("m2", "Exact", basis(8, 0)),
        ]);
        let hit = index.best_match(&basis(8, 0), THRESHOLD).unwrap().unwrap();
        assert_eq!(hit.label, "Exact");
    }

    #[test]
    fn first_seen_wins_on_exact_ties() {
        let index = AnchorIndex::new(vec![
            anchor("m1", "First", basis(8, 0)),
            anchor("m2", "Second", basis(8, 0)),
        ]);
        let hit = index.best_match(&basis(8, 0), THRESHOLD).unwrap().unwrap();
        assert_eq!(hit.label, "First");
    }

    #[test]
    fn dimension_mismatch_propagates() {
        let index = AnchorIndex::new(vec![anchor("m1", "Bad", basis(4, 0))]);
        let err = index.best_match(&basis(8, 0), THRESHOLD).unwrap_err();
        assert!(matches!(err, VectorError::DimensionMismatch { .. }));
    }
}
