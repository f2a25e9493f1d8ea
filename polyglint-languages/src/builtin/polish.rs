//! Polish

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    CountryVariants, Language, Locale, RuleId, SentenceSplitter, SymbolPair, SymbolPairs, Tagger,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 1] = [Cow::Borrowed("PL")];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);

static PAIRS: [SymbolPair; 6] = [
    SymbolPair::fixed("[", "]"),
    SymbolPair::fixed("(", ")"),
    SymbolPair::fixed("{", "}"),
    SymbolPair::fixed("„", "”"),
    SymbolPair::fixed("»", "«"),
    SymbolPair::fixed("\"", "\""),
];
static SYMBOLS: SymbolPairs = SymbolPairs::fixed(&PAIRS);

/// Word repetition within a short window, with Polish exceptions
pub const PL_WORD_REPEAT: RuleId = RuleId::fixed("PL_WORD_REPEAT");

static RULES: [RuleId; 6] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    PL_WORD_REPEAT,
];

const ABBREVIATIONS: &[&str] = &[
    "np", "itd", "itp", "tzn", "tj", "ok", "dr", "prof", "mgr", "inż", "ul", "al", "godz", "r",
];

/// Polish, with its own word-repeat check in place of the common one
#[derive(Default)]
pub struct Polish {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for Polish {
    fn locale(&self) -> Locale {
        Locale::fixed("pl")
    }

    fn name(&self) -> &str {
        "Polish"
    }

    fn short_code(&self) -> &str {
        "pl"
    }

    fn country_variants(&self) -> &CountryVariants {
        &VARIANTS
    }

    fn unpaired_symbols(&self) -> &SymbolPairs {
        &SYMBOLS
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        pass_through_tagger()
    }

    fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter> {
        lazy_splitter(&self.splitter, || {
            RuleBasedSentenceSplitter::builder()
                .abbreviations(ABBREVIATIONS)
                .closing_symbols(&SYMBOLS)
        })
    }

    fn relevant_rules(&self) -> &[RuleId] {
        &RULES
    }
}
