// randetect-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the decision
//! engine: build from a config, load the model artifact, classify, done.
//!
//! Long-lived consumers should construct a `DecisionEngine` once and reuse
//! it; these helpers pay the model load on every call.

use std::sync::Arc;

use crate::classifiers::logistic::LogisticClassifier;
use crate::config::DetectorConfig;
use crate::engine::{Decision, DecisionEngine};
use crate::errors::RandetectError;

/// Builds a `DecisionEngine` from a configuration, loading the logistic
/// model artifact from the configured (or default) path.
///
/// Fails with [`RandetectError::ModelLoad`] when the artifact is missing or
/// malformed, never yielding a half-constructed engine.
pub fn engine_from_config(config: DetectorConfig) -> Result<DecisionEngine, RandetectError> {
    let classifier = LogisticClassifier::load(config.resolved_model_path())?;
    Ok(DecisionEngine::new(Arc::new(classifier), config))
}

/// Classifies a single string in one shot.
pub fn detect_string(config: DetectorConfig, text: &str) -> Result<Decision, RandetectError> {
    let engine = engine_from_config(config)?;
    engine.classify(text)
}
