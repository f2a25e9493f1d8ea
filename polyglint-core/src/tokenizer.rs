//! Segmentation interfaces and the shared default word tokenizer

use std::sync::{Arc, OnceLock};
use unicode_segmentation::UnicodeSegmentation;

/// Splits a sentence into word, punctuation and whitespace spans
pub trait Tokenizer: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Splits a document into sentences
///
/// The returned spans keep their order and cover the whole input: joining
/// them reproduces the document exactly.
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Word tokenizer based on Unicode word boundaries (UAX #29)
///
/// Whitespace and punctuation are kept as spans of their own, so the output
/// concatenates back to the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_word_bounds().map(str::to_string).collect()
    }
}

static SHARED_WORD_TOKENIZER: OnceLock<Arc<dyn Tokenizer>> = OnceLock::new();

/// Process-wide [`WordTokenizer`] instance, for use as a registry fallback
pub fn shared_word_tokenizer() -> Arc<dyn Tokenizer> {
    SHARED_WORD_TOKENIZER
        .get_or_init(|| Arc::new(WordTokenizer))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokenizer_keeps_punctuation_and_spaces() {
        let spans = WordTokenizer.split("Hello, world!");
        assert_eq!(spans, vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_word_tokenizer_covers_input() {
        let text = "Ĉu vi parolas  Esperanton?\n(Jes.)";
        assert_eq!(WordTokenizer.split(text).concat(), text);
    }

    #[test]
    fn test_word_tokenizer_empty_input() {
        assert!(WordTokenizer.split("").is_empty());
    }

    #[test]
    fn test_shared_tokenizer_is_one_instance() {
        let a = shared_word_tokenizer();
        let b = shared_word_tokenizer();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
