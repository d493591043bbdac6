// randetect-core/src/lib.rs
//! # Randetect Core Library
//!
//! `randetect-core` decides whether a short text string is "random"
//! (meaningless character noise: generated tokens, spam gibberish) or
//! "word" (meaningful natural-language text). It is a lightweight
//! pre-filter for text-ingestion pipelines that need a cheap binary signal
//! ahead of heavier NLP processing.
//!
//! Two independent signals are fused per input:
//!
//! * a **statistical** signal: character-level Shannon entropy
//!   (from the `randetect-entropy` crate), and
//! * a **learned** signal: P(random) from an injected probabilistic
//!   classifier,
//!
//! combined by a conjunctive dual-threshold gate: the "random" label fires
//! only when *both* signals strictly exceed their thresholds.
//!
//! ## Modules
//!
//! * `config`: Defines `DecisionThresholds` and `DetectorConfig`, including
//!   YAML loading and the documented defaults (entropy 3.0, ml 0.1).
//! * `preprocess`: The normalization pipeline (emoji, digits, punctuation,
//!   accent marks, whitespace) as pluggable pure passes.
//! * `classifier`: The `Classifier` trait and `ClassifierVerdict`
//!   probability pair, the injection seam for model backends.
//! * `classifiers`: Concrete `Classifier` implementations; currently the
//!   character n-gram `LogisticClassifier` loaded from a serialized
//!   artifact.
//! * `engine`: The `DecisionEngine` fusion logic and the `entropy` signal
//!   function.
//! * `headless`: One-shot convenience wrappers for non-interactive use.
//! * `errors`: The `RandetectError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use randetect_core::{
//!     preprocess, DecisionEngine, DetectorConfig, LogisticClassifier, LogisticModelArtifact,
//! };
//!
//! fn main() -> Result<(), randetect_core::RandetectError> {
//!     // 1. Load or build a classifier artifact. Production code calls
//!     //    LogisticClassifier::load("models/logistic_regression.json").
//!     let artifact = LogisticModelArtifact {
//!         version: "demo".to_string(),
//!         ngram_size: 2,
//!         vocabulary: HashMap::new(),
//!         coefficients: Vec::new(),
//!         intercept: 2.0,
//!     };
//!     let classifier = LogisticClassifier::from_artifact(artifact)?;
//!
//!     // 2. Build the engine; the classifier is shared, read-only state.
//!     let engine = DecisionEngine::new(Arc::new(classifier), DetectorConfig::default());
//!
//!     // 3. Normalize, then classify.
//!     let cleaned = preprocess("  skvnsocmofvmsclslvlssb!! 😊 ");
//!     let decision = engine.classify(&cleaned)?;
//!     println!("label={} tag={}", decision.label.as_u8(), decision.tag());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`RandetectError`]. Model-artifact
//! problems fail construction with `ModelLoad`; an empty input string fails
//! `entropy` (and so `classify`) with `InvalidInput`; the core never
//! logs-and-continues past a failure that would produce an incorrect
//! verdict.
//!
//! ## Design Principles
//!
//! * **Injected classifier:** The model is a shared, immutable resource
//!   passed in at construction, never a module-level singleton, so tests
//!   substitute deterministic stubs.
//! * **Fail-fast construction:** A missing or corrupt artifact aborts
//!   engine construction; `classify` can never run against an absent
//!   classifier.
//! * **Precision-biased fusion:** Both signals must agree before the
//!   costlier "random" label is assigned; ties at a threshold do not
//!   trigger.
//! * **Stateless evaluation:** Every verdict is computed fresh; concurrent
//!   callers share one engine without locking.

pub mod classifier;
pub mod classifiers;
pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod preprocess;

/// Re-exports the public configuration types and documented defaults.
pub use config::{
    DecisionThresholds, DetectorConfig, DEFAULT_ENTROPY_THRESHOLD, DEFAULT_ML_THRESHOLD,
    DEFAULT_MODEL_PATH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RandetectError;

/// Re-exports the classifier seam and its probability pair.
pub use classifier::{Classifier, ClassifierVerdict, PROBABILITY_TOLERANCE};

/// Re-exports the concrete logistic regression backend.
pub use classifiers::logistic::{LogisticClassifier, LogisticModelArtifact};

/// Re-exports the decision engine, its verdict types, and the entropy
/// signal function.
pub use engine::{entropy, Decision, DecisionEngine, Label};

/// Re-exports the normalization pipeline and its standalone passes.
pub use preprocess::{
    clean_spaces, preprocess, remove_accent_marks, remove_emoji, remove_numbers,
    remove_punctuation, NormalizerPass, TextNormalizer,
};

/// Re-exports the one-shot convenience entry points.
pub use headless::{detect_string, engine_from_config};
