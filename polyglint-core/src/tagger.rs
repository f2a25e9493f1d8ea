//! Part-of-speech tagging interface
//!
//! Real taggers (dictionary lookups, disambiguation) live outside this crate.
//! Two small implementations ship here: [`PassThroughTagger`], which every
//! language without a dictionary can use, and [`ManualTagger`], which reads a
//! tab-separated lexicon.

use crate::error::{CoreError, Result};
use crate::token::AnalyzedToken;
use std::collections::HashMap;

/// Converts a raw word into zero or more analyzed readings
///
/// An empty result means the word is unknown; several results mean the word
/// is ambiguous.
///
/// Implementations must be thread-safe so a language descriptor can be shared
/// between concurrent callers.
pub trait Tagger: Send + Sync {
    fn tag(&self, word: &str) -> Vec<AnalyzedToken>;
}

/// Tagger that returns one untagged reading for every word
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughTagger;

impl Tagger for PassThroughTagger {
    fn tag(&self, word: &str) -> Vec<AnalyzedToken> {
        vec![AnalyzedToken::untagged(word)]
    }
}

/// Tagger backed by an in-memory lexicon
///
/// The lexicon format is one analysis per line:
///
/// ```text
/// # surface <TAB> lemma <TAB> tag
/// houses	house	NNS
/// houses	house	VBZ
/// ```
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct ManualTagger {
    entries: HashMap<String, Vec<(String, String)>>,
}

impl ManualTagger {
    /// Parse a lexicon from its text form
    pub fn from_lexicon(content: &str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<(String, String)>> = HashMap::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let [surface, lemma, tag] = fields.as_slice() else {
                return Err(CoreError::Lexicon {
                    line: index + 1,
                    reason: format!("expected 3 tab-separated fields, found {}", fields.len()),
                });
            };

            if surface.is_empty() || tag.is_empty() {
                return Err(CoreError::Lexicon {
                    line: index + 1,
                    reason: "surface and tag must not be empty".to_string(),
                });
            }

            entries
                .entry((*surface).to_string())
                .or_default()
                .push(((*lemma).to_string(), (*tag).to_string()));
        }

        tracing::debug!(forms = entries.len(), "parsed manual tagger lexicon");
        Ok(Self { entries })
    }

    /// Number of distinct surface forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tagger for ManualTagger {
    fn tag(&self, word: &str) -> Vec<AnalyzedToken> {
        let analyses = self
            .entries
            .get(word)
            .or_else(|| self.entries.get(&word.to_lowercase()));

        match analyses {
            Some(analyses) => analyses
                .iter()
                .map(|(lemma, tag)| {
                    let lemma = (!lemma.is_empty()).then(|| lemma.clone());
                    AnalyzedToken::new(word, Some(tag.clone()), lemma)
                })
                .collect(),
            None => Vec::new(),
        }
    }
}
