//! errors.rs - Custom error types for the randetect-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

/// This enum represents all possible error types in the `randetect-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RandetectError {
    /// The classifier artifact is missing, corrupt, or structurally
    /// incompatible. Fatal at construction: the engine is never left
    /// running against an absent classifier.
    #[error("Failed to load classifier model from '{0}': {1}")]
    ModelLoad(String, String),

    /// Input the core cannot score, e.g. the empty string handed to the
    /// entropy estimator. Recoverable by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The underlying classifier's prediction call failed. Surfaced
    /// unchanged, never swallowed.
    #[error("Classifier '{0}' failed to predict: {1}")]
    Prediction(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
