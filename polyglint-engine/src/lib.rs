//! Analysis pipeline for polyglint
//!
//! This crate drives the language plug-ins: it resolves a language from a
//! [`LanguageRegistry`](polyglint_core::LanguageRegistry), checks that every
//! rule the language names exists in a [`RuleCatalog`], and turns text into
//! [`AnalyzedSentence`]s using the language's splitter, tokenizer and tagger.
//!
//! # Example
//!
//! ```rust
//! use polyglint_engine::{Pipeline, PipelineConfig, RuleCatalog};
//! use polyglint_languages::builtin_registry;
//!
//! let registry = builtin_registry()?;
//! let config = PipelineConfig::builder().language("gl").country("ES").build()?;
//! let pipeline = Pipeline::new(&registry, &RuleCatalog::standard(), config)?;
//!
//! let sentences = pipeline.analyze("Ola mundo. Adeus.")?;
//! assert_eq!(sentences.len(), 2);
//! assert!(sentences[0].tokens()[0].is_sentence_start());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod sentence;

pub use config::{ExecutionMode, PipelineConfig, PipelineConfigBuilder};
pub use error::{EngineError, Result};
pub use pipeline::Pipeline;
pub use rules::{NamedRule, RuleCatalog, RuleDescriptor};
pub use sentence::AnalyzedSentence;
