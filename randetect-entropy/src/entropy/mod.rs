// randetect-entropy/src/entropy/mod.rs
extern crate alloc;
use alloc::collections::BTreeMap;
use libm::log2;

/// Calculates the Shannon entropy of a string, in bits per symbol.
///
/// Symbols are Unicode scalar values, folded to lowercase before counting
/// so that "Aa" is two occurrences of one symbol. Frequencies are
/// accumulated in a `BTreeMap`, giving a deterministic summation order.
///
/// Returns `None` for the empty string: the probability `count / total`
/// is undefined at zero length, and callers must treat that as an input
/// error rather than receive `NaN`.
pub fn shannon_entropy(text: &str) -> Option<f64> {
    let mut frequencies: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;

    for ch in text.chars().flat_map(char::to_lowercase) {
        *frequencies.entry(ch).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return None;
    }

    let len = total as f64;
    let mut entropy = 0.0;

    for &count in frequencies.values() {
        let p = count as f64 / len;
        entropy -= p * log2(p);
    }

    Some(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_empty_is_undefined() {
        assert_eq!(shannon_entropy(""), None);
    }

    #[test]
    fn test_entropy_zero_randomness() {
        assert_eq!(shannon_entropy("aaaaa"), Some(0.0));
    }

    #[test]
    fn test_entropy_case_folded() {
        // "Aa" is a single symbol counted twice, entropy 0.
        assert_eq!(shannon_entropy("AaAa"), Some(0.0));
    }

    #[test]
    fn test_entropy_high_randomness() {
        let entropy = shannon_entropy("abcdefgh").unwrap();
        assert!((entropy - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_entropy_two_symbols() {
        // Two equiprobable symbols carry exactly one bit.
        let entropy = shannon_entropy("abab").unwrap();
        assert!((entropy - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_entropy_non_ascii() {
        let entropy = shannon_entropy("çç").unwrap();
        assert_eq!(entropy, 0.0);
    }
}
