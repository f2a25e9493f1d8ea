//! Catalan
//!
//! Catalan is offered for Spain, Andorra, France and Italy, with the default
//! bracket pairing and the common checks.

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{CountryVariants, Language, Locale, RuleId, SentenceSplitter, Tagger};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 4] = [
    Cow::Borrowed("ES"),
    Cow::Borrowed("AD"),
    Cow::Borrowed("FR"),
    Cow::Borrowed("IT"),
];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);
static RULES: [RuleId; 6] = super::COMMON_RULES;

const ABBREVIATIONS: &[&str] = &["Sr", "Sra", "Dr", "Dra", "etc", "p.ex", "núm", "pàg", "aprox"];

/// Catalan
#[derive(Default)]
pub struct Catalan {
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for Catalan {
    fn locale(&self) -> Locale {
        Locale::fixed("ca")
    }

    fn name(&self) -> &str {
        "Catalan"
    }

    fn short_code(&self) -> &str {
        "ca"
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
