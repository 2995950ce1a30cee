//! Shared test helpers for the thermal workspace.
//!
//! Deterministic embedding builders (no real model involved), message and
//! anchor constructors, and scripted collaborator stubs for the embedder
//! and intent classifier traits.

use std::collections::HashMap;
use std::sync::Mutex;

use thermal_core::errors::{ProviderError, ThermalResult};
use thermal_core::models::{Anchor, Message, Role};
use thermal_core::traits::{IEmbedder, IIntentClassifier};

/// Unit basis vector: 1.0 at `index`, zeros elsewhere.
pub fn basis(dim: usize, index: usize) -> Vec<f32> {
    let mut v = vec![0.0; dim];
    v[index] = 1.0;
    v
}

/// A unit vector with cosine similarity exactly `cos` to `basis(dim, i)`,
/// built in the i/j plane. Requires `cos` in [-1, 1] and `i != j`.
pub fn tilted(dim: usize, i: usize, j: usize, cos: f32) -> Vec<f32> {
    assert!(i != j, "tilted needs two distinct axes");
    let mut v = vec![0.0; dim];
    v[i] = cos;
    v[j] = (1.0 - cos * cos).max(0.0).sqrt();
    v
}

/// Assistant message with the given content and embedding.
pub fn message(content: &str, embedding: Vec<f32>) -> Message {
    Message::new(Role::Assistant, content, embedding)
}

/// Assistant message with heat ranges already applied.
pub fn message_with_heat(content: &str, embedding: Vec<f32>, ranges: &[(usize, usize)]) -> Message {
    let mut m = message(content, embedding);
    for &(start, end) in ranges {
        m.try_add_range(start, end).expect("fixture range in bounds");
    }
    m
}

/// Anchor on `message_id` with the given label embedding.
pub fn anchor(message_id: &str, label: &str, label_embedding: Vec<f32>) -> Anchor {
    Anchor::new(message_id, label, label_embedding)
}

/// Deterministic embedder: hashes the text into a fixed-dimension unit
/// vector. Stable across runs, no semantics — tests that need controlled
/// similarities should construct vectors directly instead.
pub struct StubEmbedder {
    dim: usize,
}

impl StubEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl IEmbedder for StubEmbedder {
    fn embed(&self, text: &str) -> ThermalResult<Vec<f32>> {
        // FNV-1a over the bytes, redistributed per dimension.
        let mut v = vec![0.0f32; self.dim];
        let mut hash: u64 = 0xcbf29ce484222325;
        for b in text.bytes() {
            hash ^= b as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        for (i, slot) in v.iter_mut().enumerate() {
            let mixed = hash.rotate_left((i % 63) as u32 + 1);
            *slot = ((mixed % 1000) as f32 / 1000.0) + 0.001;
        }
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        Ok(v.into_iter().map(|x| x / norm).collect())
    }

    fn dimensions(&self) -> usize {
        self.dim
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

/// Embedder that always fails, for error-path tests.
pub struct FailingEmbedder;

impl IEmbedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> ThermalResult<Vec<f32>> {
        Err(ProviderError::EmbeddingFailed {
            reason: "fixture failure".into(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

/// Scripted classifier: answers per quoted snippet, records every call.
pub struct ScriptedClassifier {
    answers: HashMap<String, String>,
    fallback: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedClassifier {
    /// `answers` maps quoted_text -> raw label. Anything not scripted
    /// gets `fallback`.
    pub fn new(answers: &[(&str, &str)], fallback: &str) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fallback: fallback.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every (user_text, quoted_text) pair this classifier has seen.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl IIntentClassifier for ScriptedClassifier {
    fn classify(&self, user_text: &str, quoted_text: &str) -> ThermalResult<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((user_text.to_string(), quoted_text.to_string()));
        Ok(self
            .answers
            .get(quoted_text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn name(&self) -> &str {
        "scripted-classifier"
    }
}

/// Classifier that always fails, for the ClassifierUnavailable path.
pub struct FailingClassifier;

impl IIntentClassifier for FailingClassifier {
    fn classify(&self, _user_text: &str, _quoted_text: &str) -> ThermalResult<String> {
        Err(ProviderError::ClassifierUnavailable {
            reason: "fixture failure".into(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing-classifier"
    }
}
