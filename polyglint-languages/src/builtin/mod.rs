//! Built-in language plug-ins
//!
//! Each language is a small struct implementing [`Language`] directly. It
//! states its metadata and rule identities and only overrides what differs
//! from the shared defaults. Collaborators are created on first use and then
//! shared.

pub mod catalan;
pub mod english;
pub mod esperanto;
pub mod french;
pub mod galician;
pub mod german;
pub mod polish;
pub mod slovenian;

pub use catalan::Catalan;
pub use english::English;
pub use esperanto::Esperanto;
pub use french::French;
pub use galician::Galician;
pub use german::German;
pub use polish::Polish;
pub use slovenian::Slovenian;

use crate::error::Result;
use crate::splitter::SplitterBuilder;
use polyglint_core::{
    shared_word_tokenizer, Language, LanguageRegistry, PassThroughTagger, RuleId,
    SentenceSplitter, Tagger,
};
use std::sync::{Arc, OnceLock};

/// Checks every built-in language runs, in this order
pub(crate) const COMMON_RULES: [RuleId; 6] = [
    RuleId::COMMA_PARENTHESIS_WHITESPACE,
    RuleId::DOUBLE_PUNCTUATION,
    RuleId::UNPAIRED_BRACKETS,
    RuleId::UPPERCASE_SENTENCE_START,
    RuleId::WHITESPACE_RULE,
    RuleId::WORD_REPEAT_RULE,
];

/// One shared pass-through tagger for languages without a lexicon
pub(crate) fn pass_through_tagger() -> Arc<dyn Tagger> {
    static TAGGER: OnceLock<Arc<dyn Tagger>> = OnceLock::new();
    TAGGER.get_or_init(|| Arc::new(PassThroughTagger)).clone()
}

/// Lazily build a language's sentence splitter
pub(crate) fn lazy_splitter(
    cell: &OnceLock<Arc<dyn SentenceSplitter>>,
    configure: impl FnOnce() -> SplitterBuilder,
) -> Arc<dyn SentenceSplitter> {
    cell.get_or_init(|| {
        let splitter: Arc<dyn SentenceSplitter> = Arc::new(configure().build());
        splitter
    })
    .clone()
}

/// Fresh instances of every built-in language
pub fn all() -> Vec<Arc<dyn Language>> {
    vec![
        Arc::new(Catalan::default()),
        Arc::new(English::default()),
        Arc::new(Esperanto::default()),
        Arc::new(French::default()),
        Arc::new(Galician::default()),
        Arc::new(German::default()),
        Arc::new(Polish::default()),
        Arc::new(Slovenian::default()),
    ]
}

/// Registry holding every built-in language, with [`polyglint_core::WordTokenizer`]
/// as the default word tokenizer
pub fn builtin_registry() -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::new().with_default_word_tokenizer(shared_word_tokenizer());
    for language in all() {
        registry.register_shared(language)?;
    }
    tracing::debug!(languages = registry.len(), "built-in registry ready");
    Ok(registry)
}
