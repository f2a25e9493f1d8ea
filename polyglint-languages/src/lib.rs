//! Language plug-ins for polyglint
//!
//! This crate provides the concrete [`Language`](polyglint_core::Language)
//! implementations: a set of built-in languages and
//! [`ConfigurableLanguage`], which is assembled from a TOML file. Both use
//! the [`RuleBasedSentenceSplitter`] for sentence segmentation.
//!
//! # Example
//!
//! ```rust
//! use polyglint_core::{CoreError, Language};
//! use polyglint_languages::{builtin_registry, LanguageError};
//!
//! let registry = builtin_registry()?;
//!
//! let galician = registry.resolve("gl", Some("ES"))?;
//! assert_eq!(galician.name(), "Galician");
//!
//! let sentences = galician.sentence_splitter().split("Ola. Que tal?");
//! assert_eq!(sentences, vec!["Ola. ", "Que tal?"]);
//!
//! assert!(matches!(
//!     registry.resolve("gl", Some("FR")),
//!     Err(CoreError::UnsupportedVariant { .. })
//! ));
//! # Ok::<(), LanguageError>(())
//! ```

pub mod builtin;
pub mod config;
pub mod configurable;
pub mod error;
pub mod splitter;

pub use builtin::{
    builtin_registry, Catalan, English, Esperanto, French, Galician, German, Polish,
    Slovenian,
};
pub use config::LanguageConfig;
pub use configurable::ConfigurableLanguage;
pub use error::{LanguageError, Result};
pub use splitter::{RuleBasedSentenceSplitter, SplitterBuilder};
