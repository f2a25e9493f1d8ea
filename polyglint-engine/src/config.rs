//! Pipeline configuration

use crate::error::{EngineError, Result};

/// How sentences of one text are analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One sentence after another on the calling thread
    Sequential,
    /// Always spread sentences over the rayon thread pool
    Parallel,
    /// Parallel once the sentence count reaches the configured threshold
    #[default]
    Adaptive,
}

/// Configuration of a [`crate::Pipeline`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Short code of the language to analyze
    pub language: String,
    /// Optional country variant, e.g. "ES"
    pub country: Option<String>,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Minimum number of sentences for adaptive parallel analysis
    pub parallel_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: None,
            execution_mode: ExecutionMode::Adaptive,
            parallel_threshold: 64,
        }
    }
}

impl PipelineConfig {
    /// Configuration for a language with default settings
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }

    /// Start a builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Check the configuration before a pipeline is built from it
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(EngineError::Config("language code must not be empty".into()));
        }
        if self.country.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(EngineError::Config("country code must not be empty".into()));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::Config(
                "parallel threshold must be at least one sentence".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the country variant
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.config.country = Some(country.into());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the adaptive threshold in sentences
    pub fn parallel_threshold(mut self, sentences: usize) -> Self {
        self.config.parallel_threshold = sentences;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<PipelineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = PipelineConfig::builder()
            .language("gl")
            .country("ES")
            .execution_mode(ExecutionMode::Sequential)
            .parallel_threshold(8)
            .build()
            .unwrap();

        assert_eq!(config.language, "gl");
        assert_eq!(config.country.as_deref(), Some("ES"));
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::new("eo");
        assert_eq!(config.execution_mode, ExecutionMode::Adaptive);
        assert!(config.country.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let empty = PipelineConfig::builder().language(" ").build();
        assert!(matches!(empty, Err(EngineError::Config(_))));

        let zero = PipelineConfig::builder().parallel_threshold(0).build();
        assert!(matches!(zero, Err(EngineError::Config(msg)) if msg.contains("threshold")));

        let country = PipelineConfig::builder().country("").build();
        assert!(matches!(country, Err(EngineError::Config(_))));
    }
}
