// randetect-core/src/classifiers/logistic.rs
//! A character n-gram logistic regression classifier loaded from a
//! serialized artifact.
//!
//! The artifact is treated as opaque beyond its shape: a vocabulary mapping
//! n-grams to coefficient indices, the coefficient vector, and an intercept.
//! Construction validates that shape and fails loudly with
//! `RandetectError::ModelLoad`; a detector is never left holding a broken
//! or absent model.
//!
//! Artifacts serialize as JSON (`.json`) or bincode (any other extension).

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, ClassifierVerdict};
use crate::errors::RandetectError;

fn default_ngram_size() -> usize {
    2
}

/// The serialized form of a trained logistic regression over character
/// n-gram term frequencies.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogisticModelArtifact {
    /// Artifact schema version string.
    #[serde(default)]
    pub version: String,
    /// Character n-gram length the vocabulary was built with.
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
    /// Maps each known n-gram to its index in `coefficients`.
    pub vocabulary: HashMap<String, usize>,
    /// One weight per vocabulary entry; positive weights push toward
    /// the "random" class.
    pub coefficients: Vec<f64>,
    /// Bias term of the linear score.
    pub intercept: f64,
}

impl LogisticModelArtifact {
    fn validate(&self) -> Result<(), String> {
        if self.ngram_size == 0 {
            return Err("ngram_size must be at least 1".to_string());
        }
        if self.coefficients.len() != self.vocabulary.len() {
            return Err(format!(
                "coefficient count {} does not match vocabulary size {}",
                self.coefficients.len(),
                self.vocabulary.len()
            ));
        }
        if let Some((gram, &idx)) = self
            .vocabulary
            .iter()
            .find(|(_, &idx)| idx >= self.coefficients.len())
        {
            return Err(format!(
                "vocabulary entry '{gram}' points at coefficient {idx}, out of bounds"
            ));
        }
        Ok(())
    }
}

/// A loaded, immutable logistic regression classifier.
///
/// Shares freely across threads: prediction reads the artifact and touches
/// no mutable state.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    artifact: LogisticModelArtifact,
}

impl LogisticClassifier {
    /// Loads and validates a serialized artifact from disk.
    ///
    /// `.json` files deserialize via `serde_json`; anything else is read as
    /// bincode. Missing files, malformed bytes, and shape mismatches all
    /// surface as [`RandetectError::ModelLoad`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RandetectError> {
        let path = path.as_ref();
        let model_load = |reason: String| RandetectError::ModelLoad(path.display().to_string(), reason);

        let bytes = std::fs::read(path).map_err(|e| model_load(e.to_string()))?;

        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let artifact: LogisticModelArtifact = if is_json {
            serde_json::from_slice(&bytes).map_err(|e| model_load(e.to_string()))?
        } else {
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
                .map(|(artifact, _)| artifact)
                .map_err(|e| model_load(e.to_string()))?
        };

        artifact.validate().map_err(model_load)?;

        debug!(
            "Loaded logistic model '{}' from {}: {} n-grams (n={})",
            artifact.version,
            path.display(),
            artifact.vocabulary.len(),
            artifact.ngram_size
        );

        Ok(Self { artifact })
    }

    /// Wraps an in-memory artifact, applying the same validation as `load`.
    pub fn from_artifact(artifact: LogisticModelArtifact) -> Result<Self, RandetectError> {
        artifact
            .validate()
            .map_err(|reason| RandetectError::ModelLoad("<in-memory artifact>".to_string(), reason))?;
        Ok(Self { artifact })
    }

    /// Linear score over term frequencies of the known n-grams.
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let chars: Vec<char> = lowered.chars().collect();
        let n = self.artifact.ngram_size;

        if chars.len() < n {
            return self.artifact.intercept;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut total = 0usize;
        let mut grams: Vec<String> = Vec::with_capacity(chars.len() + 1 - n);
        for window in chars.windows(n) {
            grams.push(window.iter().collect());
            total += 1;
        }
        for gram in &grams {
            *counts.entry(gram.as_str()).or_insert(0) += 1;
        }

        let mut score = self.artifact.intercept;
        for (gram, count) in counts {
            if let Some(&idx) = self.artifact.vocabulary.get(gram) {
                let tf = count as f64 / total as f64;
                score += self.artifact.coefficients[idx] * tf;
            }
        }
        score
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for LogisticClassifier {
    fn predict_proba(&self, text: &str) -> Result<ClassifierVerdict, RandetectError> {
        let p_random = sigmoid(self.score(text));
        Ok(ClassifierVerdict::from_p_random(p_random))
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
