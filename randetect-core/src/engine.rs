//! The decision engine: fuses the statistical and learned randomness
//! signals into a single verdict.
//!
//! Two independent signals are computed per input string: the character
//! level Shannon entropy and the classifier's P(random). They combine
//! through a conjunctive dual-threshold gate: the "random" label fires only
//! when BOTH signals strictly exceed their thresholds. The gate is
//! precision-biased on purpose: a short but legitimate string (a product
//! code, say) may spike one signal alone without being flagged.

use std::sync::Arc;

use log::debug;

use crate::classifier::Classifier;
use crate::config::{DecisionThresholds, DetectorConfig};
use crate::errors::RandetectError;
use crate::preprocess::TextNormalizer;
use randetect_entropy::entropy::shannon_entropy;
use randetect_entropy::statistics::{distinct_symbols, entropy_ratio};

/// Computes the character-level Shannon entropy of a string, in bits.
///
/// Fails with [`RandetectError::InvalidInput`] for the empty string, where
/// the character distribution is undefined.
pub fn entropy(text: &str) -> Result<f64, RandetectError> {
    shannon_entropy(text).ok_or_else(|| {
        RandetectError::InvalidInput("cannot compute entropy of an empty string".to_string())
    })
}

/// The binary verdict of the decision engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Meaningful natural-language text.
    Word,
    /// Meaningless character noise.
    Random,
}

impl Label {
    /// The numeric form of the verdict: 0 for word, 1 for random.
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Word => 0,
            Label::Random => 1,
        }
    }

    /// The human-readable tag for the verdict.
    pub fn tag(self) -> &'static str {
        match self {
            Label::Word => "word",
            Label::Random => "random",
        }
    }
}

/// A verdict together with the raw signals that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// The fused binary verdict.
    pub label: Label,
    /// Shannon entropy of the scored text, in bits per symbol.
    pub entropy: f64,
    /// The classifier's P(random) for the scored text.
    pub ml_score: f64,
}

impl Decision {
    /// The human-readable tag, mirroring `label`.
    pub fn tag(&self) -> &'static str {
        self.label.tag()
    }
}

/// Fuses the entropy estimator and an injected classifier into verdicts.
///
/// The classifier is shared, read-only state: one loaded artifact serves
/// every call (and every thread) for the lifetime of the engine, with no
/// locking. Each classification is independent, so batching across inputs
/// is a plain caller-side loop or parallel iterator.
pub struct DecisionEngine {
    classifier: Arc<dyn Classifier>,
    normalizer: TextNormalizer,
    config: DetectorConfig,
}

impl core::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("classifier", &self.classifier.name())
            .field("config", &self.config)
            .finish()
    }
}

impl DecisionEngine {
    /// Builds an engine around an already-constructed classifier.
    pub fn new(classifier: Arc<dyn Classifier>, config: DetectorConfig) -> Self {
        debug!(
            "Initializing DecisionEngine with classifier '{}', thresholds (entropy {}, ml {})",
            classifier.name(),
            config.thresholds.entropy,
            config.thresholds.ml
        );
        Self {
            classifier,
            normalizer: TextNormalizer::default(),
            config,
        }
    }

    /// Replaces the default normalization pipeline.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Normalizes a string with this engine's pipeline.
    pub fn preprocess(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Classifies a string using the engine's configured thresholds.
    pub fn classify(&self, text: &str) -> Result<Decision, RandetectError> {
        self.classify_with(text, &self.config.thresholds)
    }

    /// Classifies a string with caller-supplied thresholds.
    ///
    /// Thresholds are strict inequalities: a signal sitting exactly at its
    /// threshold does not trigger, so ties resolve to `Label::Word`.
    pub fn classify_with(
        &self,
        text: &str,
        thresholds: &DecisionThresholds,
    ) -> Result<Decision, RandetectError> {
        let scored: std::borrow::Cow<'_, str> = if self.config.preprocess_before_scoring {
            self.normalizer.normalize(text).into()
        } else {
            text.into()
        };

        let ent = entropy(&scored)?;
        let verdict = self.classifier.predict_proba(&scored)?;

        let label = if verdict.p_random > thresholds.ml && ent > thresholds.entropy {
            Label::Random
        } else {
            Label::Word
        };

        debug!(
            "classified {:?}: entropy={:.4} (ratio {:.3}), p_random={:.4} -> {}",
            scored,
            ent,
            entropy_ratio(ent, distinct_symbols(&scored)),
            verdict.p_random,
            label.tag()
        );

        Ok(Decision {
            label,
            entropy: ent,
            ml_score: verdict.p_random,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifierVerdict;

    /// Deterministic stand-in for a trained model.
    struct StubClassifier {
        p_random: f64,
    }

    impl Classifier for StubClassifier {
        fn predict_proba(&self, _text: &str) -> Result<ClassifierVerdict, RandetectError> {
            Ok(ClassifierVerdict::from_p_random(self.p_random))
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn engine(p_random: f64) -> DecisionEngine {
        DecisionEngine::new(
            Arc::new(StubClassifier { p_random }),
            DetectorConfig::default(),
        )
    }

    #[test]
    fn test_entropy_of_empty_string_is_invalid_input() {
        let err = entropy("").unwrap_err();
        assert!(matches!(err, RandetectError::InvalidInput(_)));
    }

    #[test]
    fn test_entropy_of_repeated_char_is_zero() {
        for s in ["a", "bbbb", "ZZZZZZZZ"] {
            assert_eq!(entropy(s).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_random_when_both_signals_high() {
        // 16 distinct characters: entropy 4.0, above the 3.0 default.
        let decision = engine(0.9).classify("abcdefghijklmnop").unwrap();
        assert_eq!(decision.label, Label::Random);
        assert_eq!(decision.tag(), "random");
        assert_eq!(decision.label.as_u8(), 1);
    }

    #[test]
    fn test_word_when_entropy_low() {
        // "hello" sits near 1.92 bits, below the 3.0 default.
        let decision = engine(0.9).classify("hello").unwrap();
        assert_eq!(decision.label, Label::Word);
        assert_eq!(decision.tag(), "word");
        assert_eq!(decision.label.as_u8(), 0);
    }

    #[test]
    fn test_word_when_ml_score_low() {
        let decision = engine(0.05).classify("abcdefghijklmnop").unwrap();
        assert_eq!(decision.label, Label::Word);
    }

    #[test]
    fn test_entropy_tie_is_not_triggering() {
        // 8 distinct equiprobable characters: entropy exactly 3.0.
        let decision = engine(0.99).classify("abcdefgh").unwrap();
        assert_eq!(decision.entropy, 3.0);
        assert_eq!(decision.label, Label::Word);
    }

    #[test]
    fn test_ml_tie_is_not_triggering() {
        let thresholds = DecisionThresholds::default();
        let decision = engine(thresholds.ml)
            .classify_with("abcdefghijklmnop", &thresholds)
            .unwrap();
        assert_eq!(decision.label, Label::Word);
    }

    #[test]
    fn test_zero_entropy_always_word() {
        // A fully repeated string can never clear a positive entropy
        // threshold, whatever the classifier says.
        let decision = engine(1.0).classify("aaaaaaaaaa").unwrap();
        assert_eq!(decision.entropy, 0.0);
        assert_eq!(decision.label, Label::Word);
    }

    #[test]
    fn test_per_call_threshold_override() {
        let thresholds = DecisionThresholds::new(1.0, 0.5).unwrap();
        let decision = engine(0.6).classify_with("hello", &thresholds).unwrap();
        assert_eq!(decision.label, Label::Random);
    }

    #[test]
    fn test_empty_input_propagates() {
        let err = engine(0.9).classify("").unwrap_err();
        assert!(matches!(err, RandetectError::InvalidInput(_)));
    }

    #[test]
    fn test_decision_carries_raw_signals() {
        let decision = engine(0.3).classify("abab").unwrap();
        assert!((decision.entropy - 1.0).abs() < 1e-10);
        assert_eq!(decision.ml_score, 0.3);
    }

    #[test]
    fn test_classifier_failure_is_surfaced() {
        struct FailingClassifier;
        impl Classifier for FailingClassifier {
            fn predict_proba(&self, _text: &str) -> Result<ClassifierVerdict, RandetectError> {
                Err(RandetectError::Prediction(
                    "failing".to_string(),
                    "backend unavailable".to_string(),
                ))
            }
            fn name(&self) -> &str {
                "failing"
            }
        }

        let engine = DecisionEngine::new(Arc::new(FailingClassifier), DetectorConfig::default());
        let err = engine.classify("hello").unwrap_err();
        assert!(matches!(err, RandetectError::Prediction(_, _)));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = Arc::new(engine(0.9));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.classify("abcdefghijklmnop").unwrap().label)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Label::Random);
        }
    }
}
