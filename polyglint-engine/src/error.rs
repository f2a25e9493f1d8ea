//! Engine error types

use polyglint_core::{CoreError, RuleId};
use thiserror::Error;

/// Errors raised while assembling or running a pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error from the token model, a descriptor or the registry
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A language names a rule identity the catalog does not know
    #[error("language '{language}' references unknown rule '{rule}'")]
    UnresolvedRule {
        /// Short code of the language
        language: String,
        /// The identity that failed to resolve
        rule: RuleId,
    },

    /// A rule identity was registered twice
    #[error("rule '{0}' is already registered")]
    DuplicateRule(RuleId),

    /// Neither the language nor the registry supplies a word tokenizer
    #[error("no word tokenizer available for language '{0}'")]
    MissingWordTokenizer(String),

    /// Invalid pipeline configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
