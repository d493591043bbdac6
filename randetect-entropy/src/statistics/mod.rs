// randetect-entropy/src/statistics/mod.rs
extern crate alloc;
use alloc::collections::BTreeSet;
use libm::log2;

/// Counts the distinct lowercased symbols of a string.
///
/// This is the alphabet size the entropy estimate is bounded by.
pub fn distinct_symbols(text: &str) -> usize {
    let symbols: BTreeSet<char> = text.chars().flat_map(char::to_lowercase).collect();
    symbols.len()
}

/// The maximum Shannon entropy attainable over `distinct` symbols.
///
/// A uniform distribution over `n` symbols carries `log2(n)` bits;
/// zero symbols have no defined maximum, reported as 0.0.
pub fn max_entropy(distinct: usize) -> f64 {
    if distinct == 0 {
        return 0.0;
    }
    log2(distinct as f64)
}

/// Normalizes an entropy value to [0, 1] against its alphabet-size bound.
///
/// Strings over a single symbol have both entropy and bound at zero;
/// the ratio is reported as 0.0 rather than dividing by zero.
pub fn entropy_ratio(entropy: f64, distinct: usize) -> f64 {
    let bound = max_entropy(distinct);
    if bound == 0.0 {
        return 0.0;
    }
    entropy / bound
}
