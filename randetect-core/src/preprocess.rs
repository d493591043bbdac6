//! Text normalization ahead of signal computation.
//!
//! The preprocessor strips content that is high-entropy but semantically
//! irrelevant (emoji, digits, punctuation, accent marks) and collapses
//! incidental whitespace, so the entropy measurement is not skewed by
//! protocol noise and the classifier sees text comparable to its training
//! distribution.
//!
//! Each pass is a pure `fn(&str) -> String`. The passes are commutative in
//! effect, so a [`TextNormalizer`] may be built with a different pass list
//! (or a different underlying text-processing library) without touching the
//! decision engine.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A single pure normalization pass.
pub type NormalizerPass = fn(&str) -> String;

// Extended pictographics cover emoji proper; regional indicators cover flag
// pairs; FE0F/20E3 are presentation selectors and keycap combiners; the
// zero-width range would otherwise survive every later pass invisibly.
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{Extended_Pictographic}\p{Regional_Indicator}\u{FE0F}\u{20E3}\u{200B}-\u{200D}\u{FEFF}]",
    )
    .expect("emoji pattern must compile")
});

static DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Nd}").expect("digit pattern must compile"));

static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{P}").expect("punctuation pattern must compile"));

static MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{M}").expect("combining-mark pattern must compile"));

/// Removes emoji (and stray zero-width characters) from the input text.
pub fn remove_emoji(text: &str) -> String {
    EMOJI_RE.replace_all(text, "").into_owned()
}

/// Removes all decimal digit characters from the input text.
pub fn remove_numbers(text: &str) -> String {
    DIGIT_RE.replace_all(text, "").into_owned()
}

/// Removes all punctuation characters from the input text.
pub fn remove_punctuation(text: &str) -> String {
    PUNCT_RE.replace_all(text, "").into_owned()
}

/// Folds accented letters to their base letters.
///
/// The text is decomposed (NFD) so that precomposed characters split into
/// base letter plus combining marks, and the marks are then removed.
pub fn remove_accent_marks(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    MARK_RE.replace_all(&decomposed, "").into_owned()
}

/// Collapses interior whitespace runs to single spaces and trims the ends.
pub fn clean_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A configurable pipeline of normalization passes.
///
/// `clean_spaces` always runs last, after the configured passes, since the
/// removals above can leave whitespace runs behind.
#[derive(Clone)]
pub struct TextNormalizer {
    passes: Vec<NormalizerPass>,
}

impl core::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("passes", &self.passes.len())
            .finish()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            passes: vec![
                remove_emoji,
                remove_numbers,
                remove_punctuation,
                remove_accent_marks,
            ],
        }
    }
}

impl TextNormalizer {
    /// The default pipeline: emoji, digits, punctuation, accents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a normalizer with a custom pass list.
    pub fn with_passes(passes: Vec<NormalizerPass>) -> Self {
        Self { passes }
    }

    /// Runs all passes over the input and collapses whitespace.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();
        for pass in &self.passes {
            current = pass(&current);
        }
        clean_spaces(&current)
    }
}

/// Normalizes a string with the default pipeline.
///
/// Pure, idempotent, and infallible for well-formed Unicode input.
pub fn preprocess(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_emoji() {
        let cleaned = preprocess("Hello 😊🌍");
        assert!(!cleaned.contains('😊'));
        assert!(!cleaned.contains('🌍'));
        assert_eq!(cleaned, "Hello");
    }

    #[test]
    fn test_remove_numbers() {
        let cleaned = preprocess("I have 100 apples.");
        assert!(!cleaned.contains('1'));
        assert!(!cleaned.contains('0'));
        assert_eq!(cleaned, "I have apples");
    }

    #[test]
    fn test_remove_punctuation() {
        let cleaned = preprocess("Hello! How are you?");
        assert!(!cleaned.contains('!'));
        assert!(!cleaned.contains('?'));
        assert_eq!(cleaned, "Hello How are you");
    }

    #[test]
    fn test_remove_accent_marks() {
        let cleaned = preprocess("café résumé");
        assert!(!cleaned.contains('é'));
        assert_eq!(cleaned, "cafe resume");
    }

    #[test]
    fn test_clean_spaces() {
        assert_eq!(preprocess("  Hello   world  "), "Hello world");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "  Hello   world  ",
            "café résumé!! 😊 42",
            "",
            "plain",
            "ünïcödé 7⃣ done",
        ] {
            let once = preprocess(s);
            assert_eq!(preprocess(&once), once, "preprocess not idempotent on {:?}", s);
        }
    }

    #[test]
    fn test_custom_pass_list() {
        // Digits survive when the digit pass is left out.
        let normalizer = TextNormalizer::with_passes(vec![remove_punctuation]);
        assert_eq!(normalizer.normalize("agent 007!"), "agent 007");
    }
}
