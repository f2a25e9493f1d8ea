//! French
//!
//! French adds a check for the spacing French typography requires before
//! high punctuation.

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{CountryVariants, Language, Locale, RuleId, SentenceSplitter, Tagger};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 5] = [
    Cow::Borrowed("FR"),
    Cow::Borrowed("BE"),
    Cow::Borrowed("CH"),
    Cow::Borrowed("CA"),
    Cow::Borrowed("LU"),
];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);

/// Narrow no-break space before `; : ! ?` and inside guillemets
pub const FRENCH_WHITESPACE: RuleId = RuleId::fixed("FRENCH_WHITESPACE");

static RULES: [RuleId; 7] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    RuleId::WORD_REPEAT_RULE,
    FRENCH_WHITESPACE,
];

const ABBREVIATIONS: &[&str] = &["M", "MM", "Mme", "Mmes", "Mlle", "Dr", "etc", "p.ex", "cf", "env"];

/// French, offered for France, Belgium, Switzerland, Canada and Luxembourg
#[derive(Default)]
pub struct French {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for French {
    fn locale(&self) -> Locale {
        Locale::fixed("fr")
    }

    fn name(&self) -> &str {
        "French"
    }

    fn short_code(&self) -> &str {
        "fr"
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
}
