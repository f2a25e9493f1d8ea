//! Sibling readings of one surface span

use crate::error::{CoreError, Result};
use crate::token::AnalyzedToken;
use smallvec::SmallVec;

/// All analyses a tagger produced for one span of text
///
/// Every reading shares the same surface. The span's byte offset in the
/// analyzed sentence is kept alongside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenReadings {
    readings: SmallVec<[AnalyzedToken; 2]>,
    start: usize,
}

impl TokenReadings {
    /// Group readings for the span starting at `start`
    pub fn new(readings: impl IntoIterator<Item = AnalyzedToken>, start: usize) -> Result<Self> {
        let readings: SmallVec<[AnalyzedToken; 2]> = readings.into_iter().collect();

        let first = readings
            .first()
            .ok_or_else(|| CoreError::InvalidToken("a span needs at least one reading".into()))?;

        if let Some(other) = readings.iter().find(|r| r.surface() != first.surface()) {
            return Err(CoreError::InvalidToken(format!(
                "readings disagree on surface: '{}' vs '{}'",
                first.surface(),
                other.surface()
            )));
        }

        Ok(Self { readings, start })
    }

    /// A span with exactly one reading
    pub fn single(token: AnalyzedToken, start: usize) -> Self {
        let mut readings = SmallVec::new();
        readings.push(token);
        Self { readings, start }
    }

    /// Shared surface text
    pub fn surface(&self) -> &str {
        self.readings[0].surface()
    }

    /// Byte offset of the span within its sentence
    pub fn start(&self) -> usize {
        self.start
    }

    /// The individual analyses
    pub fn readings(&self) -> &[AnalyzedToken] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Whether any reading carries `tag`
    pub fn has_pos_tag(&self, tag: &str) -> bool {
        self.readings.iter().any(|r| r.pos_tag() == Some(tag))
    }

    /// Whether any reading has `lemma`
    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.readings.iter().any(|r| r.lemma() == Some(lemma))
    }

    pub fn is_whitespace(&self) -> bool {
        self.readings[0].is_whitespace()
    }

    pub fn is_sentence_start(&self) -> bool {
        self.readings.iter().any(AnalyzedToken::is_sentence_start)
    }

    pub fn is_whitespace_before(&self) -> bool {
        self.readings[0].is_whitespace_before()
    }

    /// Apply the whitespace flag to every sibling reading
    pub fn set_whitespace_before(&mut self, whitespace_before: bool) {
        for reading in &mut self.readings {
            reading.set_whitespace_before(whitespace_before);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(tag: &str, lemma: &str) -> AnalyzedToken {
        AnalyzedToken::new("saw", Some(tag.into()), Some(lemma.into()))
    }

    #[test]
    fn test_ambiguous_span() {
        let readings =
            TokenReadings::new([reading("VBD", "see"), reading("NN", "saw")], 4).unwrap();

        assert_eq!(readings.surface(), "saw");
        assert_eq!(readings.start(), 4);
        assert_eq!(readings.len(), 2);
        assert!(readings.has_pos_tag("NN"));
        assert!(readings.has_lemma("see"));
        assert!(!readings.has_pos_tag("JJ"));
    }

    #[test]
    fn test_rejects_empty_readings() {
        let result = TokenReadings::new(Vec::new(), 0);
        assert!(matches!(result, Err(CoreError::InvalidToken(_))));
    }

    #[test]
    fn test_rejects_mixed_surfaces() {
        let result = TokenReadings::new(
            [reading("VBD", "see"), AnalyzedToken::untagged("sew")],
            0,
        );
        assert!(matches!(result, Err(CoreError::InvalidToken(_))));
    }

    #[test]
    fn test_whitespace_flag_reaches_all_siblings() {
        let mut readings =
            TokenReadings::new([reading("VBD", "see"), reading("NN", "saw")], 0).unwrap();
        readings.set_whitespace_before(true);

        assert!(readings.is_whitespace_before());
        assert!(readings.readings().iter().all(|r| r.is_whitespace_before()));
    }
}
