//! Esperanto
//!
//! Esperanto has no regional variants and uses the default bracket pairing.
//! Besides the common checks it borrows the French spacing check for `?` and
//! `!`.

use super::french::FRENCH_WHITESPACE;
use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    Contributor, CountryVariants, Language, Locale, RuleId, SentenceSplitter, Tagger,
};
use std::sync::{Arc, OnceLock};

static VARIANTS: CountryVariants = CountryVariants::Any;

static RULES: [RuleId; 7] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    RuleId::WORD_REPEAT_RULE,
    FRENCH_WHITESPACE,
];

static MAINTAINERS: [Contributor; 1] = [Contributor::fixed_with_url(
    "Dominique Pellé",
    "http://dominiko.livejournal.com/tag/lingvoilo",
)];

const ABBREVIATIONS: &[&str] = &["ekz", "k.t.p", "k.s", "t.e", "s-ro", "s-ino", "d-ro", "n-ro"];

/// Esperanto: no regional variants, default bracket pairing
#[derive(Default)]
pub struct Esperanto {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for Esperanto {
    fn locale(&self) -> Locale {
        Locale::fixed("eo")
    }

    fn name(&self) -> &str {
        "Esperanto"
    }

    fn short_code(&self) -> &str {
        "eo"
    }

    fn country_variants(&self) -> &CountryVariants {
        &VARIANTS
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        pass_through_tagger()
    }

    fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter> {
        lazy_splitter(&self.splitter, || {
            RuleBasedSentenceSplitter::builder().abbreviations(ABBREVIATIONS)
        })
    }

    fn relevant_rules(&self) -> &[RuleId] {
        &RULES
    }

    fn maintainers(&self) -> &[Contributor] {
        &MAINTAINERS
    }
}
