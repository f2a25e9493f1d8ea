//! Analysis output

use polyglint_core::TokenReadings;

/// One analyzed sentence
///
/// The first entry is always the sentence-start marker; the remaining
/// entries cover the sentence text in order, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedSentence {
    text: String,
    tokens: Vec<TokenReadings>,
}

impl AnalyzedSentence {
    pub(crate) fn new(text: String, tokens: Vec<TokenReadings>) -> Self {
        Self { text, tokens }
    }

    /// The sentence text as returned by the splitter
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All spans, starting with the sentence-start marker
    pub fn tokens(&self) -> &[TokenReadings] {
        &self.tokens
    }

    /// The spans rules usually look at: marker and words, no whitespace
    pub fn tokens_without_whitespace(&self) -> Vec<&TokenReadings> {
        self.tokens.iter().filter(|t| !t.is_whitespace()).collect()
    }

    /// Number of spans, marker included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence holds no spans at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
