use thiserror::Error;

/// Errors raised while building tokens, descriptors and the language registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Token construction without surface text
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Descriptor built without a tagger
    #[error("language '{language}' has no tagger")]
    MissingTagger {
        /// Short code of the language being built
        language: String,
    },

    /// Descriptor built without a sentence splitter
    #[error("language '{language}' has no sentence splitter")]
    MissingSentenceSplitter {
        /// Short code of the language being built
        language: String,
    },

    /// Descriptor metadata is unusable (empty code, empty name, ...)
    #[error("invalid language descriptor: {0}")]
    InvalidDescriptor(String),

    /// Start and end bracket symbol lists differ in length
    #[error("unpaired symbols mismatch: {start} start symbols, {end} end symbols")]
    MismatchedSymbols {
        /// Number of start symbols
        start: usize,
        /// Number of end symbols
        end: usize,
    },

    /// A language with this short code is already registered
    #[error("language '{0}' is already registered")]
    DuplicateLanguage(String),

    /// No language registered under this short code
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// The language exists but not for the requested country
    #[error("language '{code}' is not available for country '{country}'")]
    UnsupportedVariant {
        /// Short code of the resolved language
        code: String,
        /// Requested country variant
        country: String,
    },

    /// Malformed manual tagger lexicon
    #[error("lexicon error at line {line}: {reason}")]
    Lexicon {
        /// One-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
