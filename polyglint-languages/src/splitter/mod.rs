//! Rule-based sentence splitting
//!
//! A sentence ends after a run of terminator characters that is followed by
//! whitespace or the end of the text. Closing brackets and quotes right after
//! the terminators stay with the sentence, as does the whitespace that
//! follows. A single dot closing a known abbreviation or an initial does not
//! end a sentence. Optionally, two or more consecutive line breaks end a
//! sentence even without a terminator.
//!
//! Every returned span is a slice of the input, so joining the spans gives
//! the input back.

pub mod abbreviation;
pub mod terminator;

pub use abbreviation::AbbreviationTrie;
pub use terminator::TerminatorRules;

use polyglint_core::{SentenceSplitter, SymbolPairs, DEFAULT_SYMBOL_PAIRS};
use std::collections::{HashMap, HashSet};

/// Sentence splitter driven by terminators and an abbreviation list
#[derive(Debug, Clone)]
pub struct RuleBasedSentenceSplitter {
    terminators: TerminatorRules,
    abbreviations: AbbreviationTrie,
    closing: HashSet<char>,
    paragraph_breaks: bool,
    initials: bool,
}

impl RuleBasedSentenceSplitter {
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::default()
    }

    /// Byte ranges of the sentences in `text`
    pub fn sentence_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |(pos, _)| *pos);

        let mut ranges = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];

            if self.paragraph_breaks && (ch == '\n' || ch == '\r') {
                let mut j = i;
                let mut newlines = 0;
                while j < chars.len() && matches!(chars[j].1, '\n' | '\r') {
                    if chars[j].1 == '\n' {
                        newlines += 1;
                    }
                    j += 1;
                }

                if newlines >= 2 {
                    while j < chars.len() && chars[j].1.is_whitespace() {
                        j += 1;
                    }
                    let end = byte_at(j);
                    if end > start {
                        ranges.push((start, end));
                        start = end;
                    }
                }
                i = j;
                continue;
            }

            if !self.terminators.is_terminator(ch) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && self.terminators.is_terminator(chars[j].1) {
                j += 1;
            }
            let single_dot = ch == '.' && j == i + 1;

            while j < chars.len() && self.closing.contains(&chars[j].1) {
                j += 1;
            }

            let at_end = j == chars.len();
            if !at_end && !chars[j].1.is_whitespace() {
                // "3.14", "e.g.x", "?!)x": not a boundary
                i = j;
                continue;
            }

            if single_dot && self.is_abbreviation(text, pos) {
                i = j;
                continue;
            }

            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }

            let end = byte_at(j);
            ranges.push((start, end));
            start = end;
            i = j;
        }

        if start < text.len() {
            ranges.push((start, text.len()));
        }

        ranges
    }

    fn is_abbreviation(&self, text: &str, dot_pos: usize) -> bool {
        if self.abbreviations.ends_abbreviation(text, dot_pos) {
            return true;
        }

        if self.initials {
            // "J. R. R. Tolkien"
            let mut before = text[..dot_pos].chars().rev();
            if let Some(letter) = before.next() {
                let isolated = before.next().map_or(true, |c| !c.is_alphanumeric());
                return letter.is_uppercase() && isolated;
            }
        }

        false
    }
}

impl Default for RuleBasedSentenceSplitter {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SentenceSplitter for RuleBasedSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        self.sentence_ranges(text)
            .into_iter()
            .map(|(start, end)| text[start..end].to_string())
            .collect()
    }
}

/// Builder for [`RuleBasedSentenceSplitter`]
#[derive(Debug, Clone)]
pub struct SplitterBuilder {
    terminators: Option<Vec<char>>,
    abbreviations: AbbreviationTrie,
    closing: HashSet<char>,
    paragraph_breaks: bool,
    initials: bool,
}

impl Default for SplitterBuilder {
    fn default() -> Self {
        Self {
            terminators: None,
            abbreviations: AbbreviationTrie::new(),
            closing: closing_chars(&DEFAULT_SYMBOL_PAIRS),
            paragraph_breaks: true,
            initials: true,
        }
    }
}

impl SplitterBuilder {
    /// Replace the default terminators (`.`, `!`, `?`, `…`)
    pub fn terminators(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.terminators = Some(chars.into_iter().collect());
        self
    }

    pub fn abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbr in abbreviations {
            self.abbreviations.insert(abbr.as_ref());
        }
        self
    }

    /// Add every abbreviation of the grouped lists found in language configuration files
    ///
    /// Group names only organize the configuration; all entries are treated alike.
    pub fn abbreviation_categories(mut self, categories: &HashMap<String, Vec<String>>) -> Self {
        for abbr in categories.values().flatten() {
            self.abbreviations.insert(abbr);
        }
        self
    }

    /// Closing symbols that stay attached to a sentence end
    pub fn closing_symbols(mut self, symbols: &SymbolPairs) -> Self {
        self.closing = closing_chars(symbols);
        self
    }

    /// Whether blank lines end a sentence (default: true)
    pub fn paragraph_breaks(mut self, enabled: bool) -> Self {
        self.paragraph_breaks = enabled;
        self
    }

    /// Whether a dot after a single capital letter is kept inside the sentence (default: true)
    pub fn initials(mut self, enabled: bool) -> Self {
        self.initials = enabled;
        self
    }

    pub fn build(self) -> RuleBasedSentenceSplitter {
        RuleBasedSentenceSplitter {
            terminators: self
                .terminators
                .map(TerminatorRules::new)
                .unwrap_or_default(),
            abbreviations: self.abbreviations,
            closing: self.closing,
            paragraph_breaks: self.paragraph_breaks,
            initials: self.initials,
        }
    }
}

/// Single-character closing symbols of a pairing
fn closing_chars(symbols: &SymbolPairs) -> HashSet<char> {
    symbols
        .end_symbols()
        .filter_map(|symbol| {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(splitter: &RuleBasedSentenceSplitter, text: &str) -> Vec<String> {
        SentenceSplitter::split(splitter, text)
    }

    #[test]
    fn test_basic_split() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "Hello world. This is a test! Is it?");
        assert_eq!(sentences, vec!["Hello world. ", "This is a test! ", "Is it?"]);
    }

    #[test]
    fn test_covers_input() {
        let splitter = RuleBasedSentenceSplitter::default();
        let text = "  Leading space. \"Quoted.\" (Bracketed!) Trailing";
        assert_eq!(split(&splitter, text).concat(), text);
    }

    #[test]
    fn test_closing_symbols_stay_with_sentence() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "He said \"Go.\" Then he left.");
        assert_eq!(sentences, vec!["He said \"Go.\" ", "Then he left."]);
    }

    #[test]
    fn test_decimal_numbers() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "It costs 3.50 euros. Cheap.");
        assert_eq!(sentences, vec!["It costs 3.50 euros. ", "Cheap."]);
    }

    #[test]
    fn test_abbreviations() {
        let splitter = RuleBasedSentenceSplitter::builder()
            .abbreviations(["Dr", "etc"])
            .build();
        let sentences = split(&splitter, "Ask Dr. Smith. Bring pens, paper etc. and more.");
        assert_eq!(sentences, vec!["Ask Dr. Smith. ", "Bring pens, paper etc. and more."]);
    }

    #[test]
    fn test_abbreviation_groups_merge() {
        let mut groups = HashMap::new();
        groups.insert("titles".to_string(), vec!["Sr".to_string()]);
        groups.insert("units".to_string(), vec!["km.".to_string()]);

        let splitter = RuleBasedSentenceSplitter::builder()
            .abbreviation_categories(&groups)
            .build();
        let sentences = split(&splitter, "O Sr. Pérez andou 5 km. ao día. Chegou.");
        assert_eq!(sentences, vec!["O Sr. Pérez andou 5 km. ao día. ", "Chegou."]);
    }

    #[test]
    fn test_initials() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "J. R. R. Tolkien wrote it. Really.");
        assert_eq!(sentences, vec!["J. R. R. Tolkien wrote it. ", "Really."]);

        let strict = RuleBasedSentenceSplitter::builder().initials(false).build();
        assert_eq!(split(&strict, "Plan B. Then C.").len(), 2);
    }

    #[test]
    fn test_repeated_terminators() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "Really?! Yes... Fine.");
        assert_eq!(sentences, vec!["Really?! ", "Yes... ", "Fine."]);
    }

    #[test]
    fn test_paragraph_breaks() {
        let splitter = RuleBasedSentenceSplitter::default();
        let sentences = split(&splitter, "Title\n\nBody text.");
        assert_eq!(sentences, vec!["Title\n\n", "Body text."]);

        let single = split(&splitter, "Line one\nline two.");
        assert_eq!(single, vec!["Line one\nline two."]);

        let disabled = RuleBasedSentenceSplitter::builder()
            .paragraph_breaks(false)
            .build();
        assert_eq!(split(&disabled, "Title\n\nBody text.").len(), 1);
    }

    #[test]
    fn test_custom_terminators() {
        let splitter = RuleBasedSentenceSplitter::builder()
            .terminators(['.', '?', '!', ';'])
            .build();
        assert_eq!(split(&splitter, "Ναι; Όχι.").len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let splitter = RuleBasedSentenceSplitter::default();
        assert!(split(&splitter, "").is_empty());
    }
}
