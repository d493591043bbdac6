//! Defines the `Classifier` trait and its probability pair.
//!
//! The trait decouples the decision engine from any particular model
//! implementation: production code injects a loaded artifact, tests inject
//! a deterministic stub. Implementations must be immutable after
//! construction so a single instance can serve concurrent callers behind an
//! `Arc` without locking.

use crate::errors::RandetectError;

/// Tolerance for the "probabilities sum to one" invariant.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// The probability pair produced by a binary word-vs-random classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierVerdict {
    /// Probability the string is meaningful text.
    pub p_word: f64,
    /// Probability the string is random noise.
    pub p_random: f64,
}

impl ClassifierVerdict {
    /// Builds a verdict, enforcing that both values are probabilities and
    /// sum to one within [`PROBABILITY_TOLERANCE`].
    pub fn new(p_word: f64, p_random: f64) -> Result<Self, RandetectError> {
        if !(0.0..=1.0).contains(&p_word) || !(0.0..=1.0).contains(&p_random) {
            return Err(RandetectError::InvalidInput(format!(
                "class probabilities out of range: p_word={p_word}, p_random={p_random}"
            )));
        }
        if (p_word + p_random - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(RandetectError::InvalidInput(format!(
                "class probabilities must sum to 1.0, got {}",
                p_word + p_random
            )));
        }
        Ok(Self { p_word, p_random })
    }

    /// Builds a verdict from P(random), deriving P(word) as the complement.
    ///
    /// `p_random` is clamped to [0, 1] against floating-point drift from
    /// the underlying model's link function.
    pub fn from_p_random(p_random: f64) -> Self {
        let p_random = p_random.clamp(0.0, 1.0);
        Self {
            p_word: 1.0 - p_random,
            p_random,
        }
    }
}

/// A trait for probabilistic word-vs-random classifiers.
///
/// The engine treats implementations as opaque: given a string, they return
/// class probabilities. Any failure from the underlying model is surfaced
/// unchanged, never swallowed.
pub trait Classifier: Send + Sync {
    /// Predicts the class probability pair for a single string.
    fn predict_proba(&self, text: &str) -> Result<ClassifierVerdict, RandetectError>;

    /// A short identifier for logging and error reporting.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_accepts_valid_pair() {
        let verdict = ClassifierVerdict::new(0.9, 0.1).unwrap();
        assert_eq!(verdict.p_random, 0.1);
    }

    #[test]
    fn test_verdict_rejects_out_of_range() {
        assert!(ClassifierVerdict::new(-0.1, 1.1).is_err());
    }

    #[test]
    fn test_verdict_rejects_bad_sum() {
        assert!(ClassifierVerdict::new(0.5, 0.2).is_err());
    }

    #[test]
    fn test_verdict_tolerates_float_noise() {
        assert!(ClassifierVerdict::new(0.7, 0.3 + 1e-9).is_ok());
    }

    #[test]
    fn test_from_p_random_complement() {
        let verdict = ClassifierVerdict::from_p_random(0.25);
        assert_eq!(verdict.p_word, 0.75);
    }
}
