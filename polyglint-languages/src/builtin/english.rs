//! English
//!
//! English tags words from a small closed-class lexicon compiled into the
//! crate, and adds article and compound checks to the common ones.

use super::lazy_splitter;
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    CountryVariants, Language, Locale, ManualTagger, RuleId, SentenceSplitter, Tagger,
};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

static COUNTRIES: [Cow<'static, str>; 7] = [
    Cow::Borrowed("US"),
    Cow::Borrowed("GB"),
    Cow::Borrowed("AU"),
    Cow::Borrowed("NZ"),
    Cow::Borrowed("ZA"),
    Cow::Borrowed("CA"),
    Cow::Borrowed("IE"),
];
static VARIANTS: CountryVariants = CountryVariants::fixed(&COUNTRIES);

/// "a" versus "an" before vowel sounds
pub const EN_A_VS_AN: RuleId = RuleId::fixed("EN_A_VS_AN");
/// Open, hyphenated and closed compound spellings
pub const EN_COMPOUNDS: RuleId = RuleId::fixed("EN_COMPOUNDS");

static RULES: [RuleId; 8] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    RuleId::WORD_REPEAT_RULE,
    EN_A_VS_AN,
    EN_COMPOUNDS,
];

const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Inc", "Ltd", "Co", "etc", "e.g", "i.e",
    "vs", "approx", "Jan", "Feb", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const LEXICON: &str = include_str!("../../data/english.tsv");

/// English with a small embedded closed-class lexicon
#[derive(Default)]
pub struct English {
    tagger: OnceLock<Arc<dyn Tagger>>,
    splitter: OnceLock<Arc<dyn SentenceSplitter>>,
}

impl Language for English {
    fn locale(&self) -> Locale {
        Locale::fixed_with_country("en", "US")
    }

    fn name(&self) -> &str {
        "English"
    }

    fn short_code(&self) -> &str {
        "en"
    }

    fn country_variants(&self) -> &CountryVariants {
        &VARIANTS
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        self.tagger
            .get_or_init(|| {
                let lexicon = ManualTagger::from_lexicon(LEXICON)
                    .expect("Failed to load embedded English lexicon");
                let tagger: Arc<dyn Tagger> = Arc::new(lexicon);
                tagger
            })
            .clone()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_is_well_formed() {
        let tagger = ManualTagger::from_lexicon(LEXICON).unwrap();
        assert!(tagger.len() > 40);
        assert!(!tagger.tag("an").is_empty());
    }

    #[test]
    fn test_embedded_lexicon_tags_known_words() {
        let english = English::default();
        let readings = english.tagger().tag("houses");
        assert_eq!(readings.len(), 2);
        assert!(readings.iter().all(|r| r.lemma() == Some("house")));
        assert!(english.tagger().tag("zyzzyva").is_empty());
    }

    #[test]
    fn test_lowercase_fallback() {
        let readings = English::default().tagger().tag("The");
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].surface(), "The");
        assert_eq!(readings[0].pos_tag(), Some("DT"));
    }

    #[test]
    fn test_title_abbreviation_does_not_split() {
        let sentences = English::default()
            .sentence_splitter()
            .split("Dr. Smith arrived. He sat down.");
        assert_eq!(sentences, vec!["Dr. Smith arrived. ", "He sat down."]);
    }
}
