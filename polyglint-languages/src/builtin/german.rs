//! German
//!
//! German pairs its low-opening quotes and inward guillemets, and adds
//! agreement and noun capitalization checks.

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    CountryVariants, Language, Locale, RuleId, SentenceSplitter, SymbolPair, SymbolPairs, Tagger,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 5] = [
    Cow::Borrowed("DE"),
    Cow::Borrowed("AT"),
    Cow::Borrowed("CH"),
    Cow::Borrowed("LU"),
    Cow::Borrowed("LI"),
];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);

// German quotes open low („ ‚) and close high (“ ‘); guillemets point inwards
static PAIRS: [SymbolPair; 7] = [
    SymbolPair::fixed("[", "]"),
    SymbolPair::fixed("(", ")"),
    SymbolPair::fixed("{", "}"),
    SymbolPair::fixed("„", "“"),
    SymbolPair::fixed("»", "«"),
    SymbolPair::fixed("‚", "‘"),
    SymbolPair::fixed("\"", "\""),
];
static SYMBOLS: SymbolPairs = SymbolPairs::fixed(&PAIRS);

/// Agreement between article, adjective and noun
pub const DE_AGREEMENT: RuleId = RuleId::fixed("DE_AGREEMENT");
/// Capitalization of nouns
pub const DE_CASE: RuleId = RuleId::fixed("DE_CASE");

static RULES: [RuleId; 8] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    RuleId::WORD_REPEAT_RULE,
    DE_AGREEMENT,
    DE_CASE,
];

const ABBREVIATIONS: &[&str] = &[
    "z.B", "bzw", "usw", "d.h", "u.a", "vgl", "ca", "Dr", "Hr", "Fr", "Nr", "Str", "Prof", "evtl",
];

/// German, offered for Germany, Austria, Switzerland, Luxembourg and Liechtenstein
#[derive(Default)]
pub struct German {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for German {
    fn locale(&self) -> Locale {
        Locale::fixed("de")
    }

    fn name(&self) -> &str {
        "German"
    }

    fn short_code(&self) -> &str {
        "de"
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
