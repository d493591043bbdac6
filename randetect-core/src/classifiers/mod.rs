// randetect-core/src/classifiers/mod.rs
//! This module contains concrete `Classifier` implementations.
//!
//! Each implementation is a separate file within this directory and
//! implements the `Classifier` trait. To add a new model backend, create a
//! new file (e.g., `logistic.rs`), define its logic, and declare it here
//! using `pub mod <backend_name>;`.

pub mod logistic;
