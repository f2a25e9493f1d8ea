//! Galician
//!
//! Galician is only offered for Spain. It brings its own word tokenizer
//! instead of relying on the registry default.

use super::{lazy_splitter, pass_through_tagger};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    Contributor, CountryVariants, Language, Locale, RuleId, SentenceSplitter, Tagger, Tokenizer,
    WordTokenizer,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 1] = [Cow::Borrowed("ES")];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);
static RULES: [RuleId; 6] = super::COMMON_RULES;

static MAINTAINERS: [Contributor; 1] = [Contributor::fixed_with_url(
    "Susana Sotelo Docío",
    "http://www.g11n.net/languagetool-gl",
)];

const ABBREVIATIONS: &[&str] = &["Sr", "Sra", "Dr", "Dra", "etc", "p.ex", "núm", "pág", "Ud"];

/// Galician, with a word tokenizer of its own
#[derive(Default)]
pub struct Galician {
    tokenizer: OnceLock<Arc<dyn Tokenizer>>,
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for Galician {
    fn locale(&self) -> Locale {
        Locale::fixed("gl")
    }

    fn name(&self) -> &str {
        "Galician"
    }

    fn short_code(&self) -> &str {
        "gl"
    }

    fn country_variants(&self) -> &CountryVariants {
        &VARIANTS
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        pass_through_tagger()
    }

    fn word_tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        let tokenizer = self.tokenizer.get_or_init(|| {
            let tokenizer: Arc<dyn Tokenizer> = Arc::new(WordTokenizer);
            tokenizer
        });
        Some(Arc::clone(tokenizer))
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
