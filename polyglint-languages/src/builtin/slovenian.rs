//! Slovenian
//!
//! Slovenian quotes open low („) and close high (”); guillemets point inwards.
//! Single quotes are not paired.

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    Contributor, CountryVariants, Language, Locale, RuleId, SentenceSplitter, SymbolPair,
    SymbolPairs, Tagger,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 1] = [Cow::Borrowed("SI")];
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

static RULES: [RuleId; 6] = super::COMMON_RULES;

static MAINTAINERS: [Contributor; 1] = [Contributor::fixed("Martin Srebotnjak")];

const ABBREVIATIONS: &[&str] = &[
    "npr", "itd", "ipd", "idr", "oz", "tj", "t.i", "dr", "mag", "prof", "ga", "go", "št", "str",
];

/// Slovenian, offered for Slovenia
#[derive(Default)]
pub struct Slovenian {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for Slovenian {
    fn locale(&self) -> Locale {
        Locale::fixed("sl")
    }

    fn name(&self) -> &str {
        "Slovenian"
    }

    fn short_code(&self) -> &str {
        "sl"
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

    fn maintainers(&self) -> &[Contributor] {
        &MAINTAINERS
    }
}
