//! Language plug-in core for the polyglint grammar checker
//!
//! This crate defines the two contracts every other part of polyglint is
//! built on:
//!
//! - [`AnalyzedToken`]: one reading of one lexical unit (surface text, part
//!   of speech, lemma, whitespace-before flag). Rules match against token
//!   values, so equality covers all four fields.
//! - [`Language`]: the capability set a natural language plugs into the
//!   checking pipeline with (locale metadata, tagger, tokenizers, bracket
//!   pairing, rule identities), plus the [`LanguageRegistry`] that maps short
//!   codes to languages.
//!
//! Tokenizing, tagging and rule execution are external collaborators,
//! described here only by the [`Tagger`], [`Tokenizer`] and
//! [`SentenceSplitter`] traits and by [`RuleId`].
//!
//! # Example
//!
//! ```rust
//! use polyglint_core::{AnalyzedToken, CoreError};
//!
//! let token = AnalyzedToken::new("houses", Some("NNS".into()), Some("house".into()));
//! assert_eq!(token.match_form(), "house");
//! assert_eq!(token.to_string(), "houses|NNS");
//!
//! let missing = AnalyzedToken::create(None::<String>, None, None);
//! assert!(matches!(missing, Err(CoreError::InvalidToken(_))));
//! ```

pub mod descriptor;
pub mod error;
pub mod language;
pub mod locale;
pub mod readings;
pub mod registry;
pub mod rule;
pub mod symbols;
pub mod tagger;
pub mod token;
pub mod tokenizer;

pub use descriptor::{LanguageDescriptor, LanguageDescriptorBuilder};
pub use error::{CoreError, Result};
pub use language::{Contributor, Language};
pub use locale::{CountryVariants, Locale, ANY_COUNTRY};
pub use readings::TokenReadings;
pub use registry::LanguageRegistry;
pub use rule::RuleId;
pub use symbols::{SymbolPair, SymbolPairs, DEFAULT_SYMBOL_PAIRS};
pub use tagger::{ManualTagger, PassThroughTagger, Tagger};
pub use token::{AnalyzedToken, SENTENCE_START_TAG};
pub use tokenizer::{shared_word_tokenizer, SentenceSplitter, Tokenizer, WordTokenizer};
