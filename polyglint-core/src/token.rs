//! Analyzed token model
//!
//! An [`AnalyzedToken`] is one reading of one lexical unit: the surface text
//! as it appeared in the input plus the part-of-speech tag and lemma a tagger
//! assigned to it. Words with several possible analyses are represented by
//! several sibling tokens (see [`crate::readings::TokenReadings`]), never by a
//! list inside a single token.

use crate::error::{CoreError, Result};
use std::fmt;

/// Part-of-speech tag carried by the synthetic sentence-start marker
pub const SENTENCE_START_TAG: &str = "SENT_START";

/// One analysis of a lexical unit
///
/// Equality, hashing and ordering cover exactly
/// `(surface, pos_tag, lemma, whitespace_before)`. The whitespace flag is part
/// of a token's identity: `"word"` after a space is not equal to `"word"`
/// glued to the previous token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzedToken {
    surface: String,
    pos_tag: Option<String>,
    lemma: Option<String>,
    whitespace_before: bool,
}

impl AnalyzedToken {
    /// Create a token from a surface that is always present
    pub fn new(
        surface: impl Into<String>,
        pos_tag: Option<String>,
        lemma: Option<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            pos_tag,
            lemma,
            whitespace_before: false,
        }
    }

    /// Create a token from a source that may lack surface text
    ///
    /// An explicit empty string is a legal surface (used by synthetic
    /// markers); only a missing one is rejected.
    pub fn create(
        surface: Option<impl Into<String>>,
        pos_tag: Option<String>,
        lemma: Option<String>,
    ) -> Result<Self> {
        let surface = surface.ok_or_else(|| {
            CoreError::InvalidToken("surface text is required".to_string())
        })?;
        Ok(Self::new(surface, pos_tag, lemma))
    }

    /// Untagged token without lemma
    pub fn untagged(surface: impl Into<String>) -> Self {
        Self::new(surface, None, None)
    }

    /// The synthetic marker placed at the start of every analyzed sentence
    pub fn sentence_start() -> Self {
        Self::new("", Some(SENTENCE_START_TAG.to_string()), None)
    }

    /// The exact text as it appeared in the input
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Part-of-speech tag, `None` when untagged
    pub fn pos_tag(&self) -> Option<&str> {
        self.pos_tag.as_deref()
    }

    /// Dictionary form, `None` when unknown
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    /// Form used when matching rule patterns: the lemma if known, else the surface
    pub fn match_form(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.surface)
    }

    /// Whether whitespace precedes this token in the input
    pub fn is_whitespace_before(&self) -> bool {
        self.whitespace_before
    }

    /// Record whether whitespace precedes this token
    ///
    /// This is the only field that may change after construction. It is set
    /// by the segmenter that produced the token, before the token is shared.
    pub fn set_whitespace_before(&mut self, whitespace_before: bool) {
        self.whitespace_before = whitespace_before;
    }

    /// Builder-style variant of [`Self::set_whitespace_before`]
    pub fn with_whitespace_before(mut self, whitespace_before: bool) -> Self {
        self.set_whitespace_before(whitespace_before);
        self
    }

    /// Whether the surface is non-empty and made only of whitespace
    pub fn is_whitespace(&self) -> bool {
        !self.surface.is_empty() && self.surface.chars().all(char::is_whitespace)
    }

    /// Whether this is the synthetic sentence-start marker
    pub fn is_sentence_start(&self) -> bool {
        self.surface.is_empty() && self.pos_tag.as_deref() == Some(SENTENCE_START_TAG)
    }
}

impl fmt::Display for AnalyzedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos_tag {
            Some(tag) => write!(f, "{}|{}", self.surface, tag),
            None => f.write_str(&self.surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(token: &AnalyzedToken) -> u64 {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_match_form_prefers_lemma() {
        let token = AnalyzedToken::new("houses", Some("NNS".into()), Some("house".into()));
        assert_eq!(token.match_form(), "house");

        let token = AnalyzedToken::new("Zamenhof", None, None);
        assert_eq!(token.match_form(), "Zamenhof");
    }

    #[test]
    fn test_create_rejects_missing_surface() {
        let result = AnalyzedToken::create(None::<String>, Some("NN".into()), None);
        assert!(matches!(result, Err(CoreError::InvalidToken(_))));
    }

    #[test]
    fn test_create_accepts_empty_surface() {
        let token = AnalyzedToken::create(Some(""), None, None).unwrap();
        assert_eq!(token.surface(), "");
        assert_eq!(token.match_form(), "");
    }

    #[test]
    fn test_equality_includes_whitespace_flag() {
        let a = AnalyzedToken::new("casa", Some("NCFS000".into()), Some("casa".into()));
        let b = a.clone().with_whitespace_before(true);

        assert_ne!(a, b);
        assert_eq!(a, b.clone().with_whitespace_before(false));
    }

    #[test]
    fn test_set_whitespace_before_is_idempotent() {
        let mut once = AnalyzedToken::untagged("word");
        once.set_whitespace_before(true);

        let mut twice = AnalyzedToken::untagged("word");
        twice.set_whitespace_before(true);
        twice.set_whitespace_before(true);

        assert_eq!(once, twice);
        assert_eq!(hash_of(&once), hash_of(&twice));
    }

    #[test]
    fn test_display() {
        let tagged = AnalyzedToken::new("dogs", Some("NNS".into()), Some("dog".into()));
        assert_eq!(tagged.to_string(), "dogs|NNS");
        assert_eq!(AnalyzedToken::untagged("xyz").to_string(), "xyz");
    }

    #[test]
    fn test_sentence_start_marker() {
        let marker = AnalyzedToken::sentence_start();
        assert!(marker.is_sentence_start());
        assert!(!marker.is_whitespace());
        assert!(!AnalyzedToken::untagged("").is_sentence_start());
    }

    #[test]
    fn test_is_whitespace() {
        assert!(AnalyzedToken::untagged(" \t").is_whitespace());
        assert!(!AnalyzedToken::untagged("a ").is_whitespace());
        assert!(!AnalyzedToken::untagged("").is_whitespace());
    }

    #[test]
    fn test_ordering_follows_surface_first() {
        let a = AnalyzedToken::untagged("alpha");
        let b = AnalyzedToken::untagged("beta");
        assert!(a < b);
    }
}
