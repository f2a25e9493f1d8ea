//! The language plug-in contract
//!
//! A [`Language`] describes everything the checking pipeline needs to process
//! text in one natural language: metadata, the collaborators that segment and
//! tag text, the bracket pairing used for punctuation balance, and the rules
//! that apply. It performs no text processing itself.
//!
//! Every accessor is an override point. Concrete languages implement the
//! required metadata and collaborators and inherit the shared defaults for the
//! rest.
//!
//! # Usage
//!
//! ```rust
//! use polyglint_core::{
//!     CountryVariants, Language, Locale, PassThroughTagger, RuleId, SentenceSplitter, Tagger,
//! };
//! use std::sync::Arc;
//!
//! struct LineSplitter;
//!
//! impl SentenceSplitter for LineSplitter {
//!     fn split(&self, text: &str) -> Vec<String> {
//!         text.split_inclusive('\n').map(str::to_string).collect()
//!     }
//! }
//!
//! static VARIANTS: CountryVariants = CountryVariants::Any;
//! static RULES: [RuleId; 1] = [RuleId::WORD_REPEAT_RULE];
//!
//! struct Toki;
//!
//! impl Language for Toki {
//!     fn locale(&self) -> Locale { Locale::fixed("tok") }
//!     fn name(&self) -> &str { "Toki Pona" }
//!     fn short_code(&self) -> &str { "tok" }
//!     fn country_variants(&self) -> &CountryVariants { &VARIANTS }
//!     fn tagger(&self) -> Arc<dyn Tagger> { Arc::new(PassThroughTagger) }
//!     fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter> { Arc::new(LineSplitter) }
//!     fn relevant_rules(&self) -> &[RuleId] { &RULES }
//! }
//!
//! let toki = Toki;
//! assert_eq!(toki.unpaired_start_symbols().len(), toki.unpaired_end_symbols().len());
//! assert!(toki.word_tokenizer().is_none());
//! ```

use crate::locale::{CountryVariants, Locale};
use crate::rule::RuleId;
use crate::symbols::{SymbolPairs, DEFAULT_SYMBOL_PAIRS};
use crate::tagger::Tagger;
use crate::tokenizer::{SentenceSplitter, Tokenizer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Someone who maintains a language module; informational only
///
/// Built-in languages keep their maintainers in static tables:
///
/// ```rust
/// use polyglint_core::Contributor;
///
/// static MAINTAINERS: [Contributor; 1] =
///     [Contributor::fixed_with_url("Ana Rivas", "https://example.org/ana")];
///
/// assert_eq!(MAINTAINERS[0].url.as_deref(), Some("https://example.org/ana"));
/// assert_eq!(Contributor::new("Ana Rivas").with_remark("rules").to_string(), "Ana Rivas (rules)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contributor {
    /// Full name
    pub name: Cow<'static, str>,
    /// Home page or project page
    pub url: Option<Cow<'static, str>>,
    /// Free-form note, e.g. the part of the module maintained
    pub remark: Option<Cow<'static, str>>,
}

impl Contributor {
    /// Contributor with a static name, usable in `static` tables
    pub const fn fixed(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            url: None,
            remark: None,
        }
    }

    /// Like [`Contributor::fixed`], with a static URL
    pub const fn fixed_with_url(name: &'static str, url: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            url: Some(Cow::Borrowed(url)),
            remark: None,
        }
    }

    /// Contributor with an owned name, e.g. read from configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            url: None,
            remark: None,
        }
    }

    /// Set the home page
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(Cow::Owned(url.into()));
        self
    }

    /// Set the remark shown after the name
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(Cow::Owned(remark.into()));
        self
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(remark) = &self.remark {
            write!(f, " ({remark})")?;
        }
        Ok(())
    }
}

/// Capability set of one supported natural language
///
/// Implementations are constructed once at startup and shared read-only, so
/// they must be thread-safe.
pub trait Language: Send + Sync {
    /// Locale identifier, e.g. `gl` or `en-US`
    fn locale(&self) -> Locale;

    /// Human-readable name, e.g. "Galician"
    fn name(&self) -> &str;

    /// Short code used as the registry key, e.g. "gl"
    fn short_code(&self) -> &str;

    /// Regions this language code is valid for
    fn country_variants(&self) -> &CountryVariants;

    /// Bracket and quote pairing used by the punctuation-balance check
    fn unpaired_symbols(&self) -> &SymbolPairs {
        &DEFAULT_SYMBOL_PAIRS
    }

    /// Opening symbols, index-aligned with [`Language::unpaired_end_symbols`]
    fn unpaired_start_symbols(&self) -> Vec<&str> {
        self.unpaired_symbols().start_symbols().collect()
    }

    /// Closing symbols, index-aligned with [`Language::unpaired_start_symbols`]
    fn unpaired_end_symbols(&self) -> Vec<&str> {
        self.unpaired_symbols().end_symbols().collect()
    }

    /// The language's part-of-speech tagger
    fn tagger(&self) -> Arc<dyn Tagger>;

    /// Language-specific word tokenizer
    ///
    /// `None` means the language uses the registry's default tokenizer, see
    /// [`crate::LanguageRegistry::word_tokenizer`].
    fn word_tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        None
    }

    /// The language's sentence splitter
    fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter>;

    /// Identities of the rules that run for this language, in execution order
    fn relevant_rules(&self) -> &[RuleId];

    /// People maintaining this language module; empty by default
    fn maintainers(&self) -> &[Contributor] {
        &[]
    }
}

impl fmt::Debug for dyn Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("code", &self.short_code())
            .field("name", &self.name())
            .field("locale", &self.locale())
            .finish()
    }
}
