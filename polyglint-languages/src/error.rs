use polyglint_core::CoreError;
use thiserror::Error;

/// Errors raised while loading or assembling language plug-ins
#[derive(Debug, Error)]
pub enum LanguageError {
    /// Configuration loading, parsing or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Descriptor or registry error from the core
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for language plug-in operations
pub type Result<T> = std::result::Result<T, LanguageError>;
