//! Configuration management for `randetect-core`.
//!
//! This module defines the decision thresholds and detector configuration.
//! It handles serialization/deserialization of YAML configurations and
//! provides documented defaults for per-call threshold overrides.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Default threshold the entropy signal must strictly exceed (bits per symbol).
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 3.0;

/// Default threshold the classifier's P(random) must strictly exceed.
pub const DEFAULT_ML_THRESHOLD: f64 = 0.1;

/// Path a detector falls back to when no model path is configured,
/// resolved relative to the process working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/logistic_regression.json";

/// The pair of thresholds gating the "random" verdict.
///
/// Both values are per-invocation parameters, not global state: callers may
/// tune them per use case without redeployment. The defaults are empirically
/// tuned and carry no further semantics.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Entropy (bits per symbol) above which a string counts as statistically
    /// random (default: 3.0).
    pub entropy: f64,
    /// Classifier P(random) above which a string counts as learned-random
    /// (default: 0.1).
    pub ml: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            entropy: DEFAULT_ENTROPY_THRESHOLD,
            ml: DEFAULT_ML_THRESHOLD,
        }
    }
}

impl Hash for DecisionThresholds {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entropy.to_bits().hash(state);
        self.ml.to_bits().hash(state);
    }
}

impl DecisionThresholds {
    /// Builds a threshold pair, validating the classifier threshold is a
    /// probability and the entropy threshold non-negative.
    pub fn new(entropy: f64, ml: f64) -> Result<Self> {
        anyhow::ensure!(
            entropy >= 0.0,
            "entropy threshold must be non-negative, got {entropy}"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&ml),
            "ml threshold must be within [0, 1], got {ml}"
        );
        Ok(Self { entropy, ml })
    }
}

/// Configuration for a `DecisionEngine`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Hash)]
#[serde(default)]
pub struct DetectorConfig {
    /// Path to the serialized classifier artifact. When absent, the engine
    /// falls back to [`DEFAULT_MODEL_PATH`].
    pub model_path: Option<PathBuf>,
    /// Default thresholds used by `classify`; overridable per call.
    pub thresholds: DecisionThresholds,
    /// When true, the normalizer runs on the input before either signal is
    /// computed. Off by default: signals score the raw string, and callers
    /// preprocess explicitly when they want normalized scoring.
    pub preprocess_before_scoring: bool,
}

impl DetectorConfig {
    /// Loads a detector configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading detector config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DetectorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(
            "Config loaded: thresholds=(entropy {}, ml {}), preprocess_before_scoring={}",
            config.thresholds.entropy, config.thresholds.ml, config.preprocess_before_scoring
        );
        Ok(config)
    }

    /// The model path to load, falling back to [`DEFAULT_MODEL_PATH`].
    pub fn resolved_model_path(&self) -> PathBuf {
        self.model_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
    }
}
