//! Text analysis pipeline
//!
//! A [`Pipeline`] binds one language to its collaborators: it splits text
//! into sentences, sentences into word spans, and tags each span. Rule
//! identities are resolved up front so that a misconfigured language fails
//! at construction rather than during analysis.

use crate::config::{ExecutionMode, PipelineConfig};
use crate::error::{EngineError, Result};
use crate::rules::{RuleCatalog, RuleDescriptor};
use crate::sentence::AnalyzedSentence;
use polyglint_core::{
    AnalyzedToken, Language, LanguageRegistry, SentenceSplitter, Tagger, TokenReadings, Tokenizer,
};
use std::fmt;
use std::sync::Arc;

/// Analyzer for one language
pub struct Pipeline {
    language: Arc<dyn Language>,
    tagger: Arc<dyn Tagger>,
    splitter: Arc<dyn SentenceSplitter>,
    tokenizer: Arc<dyn Tokenizer>,
    rules: Vec<Arc<dyn RuleDescriptor>>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Resolve the configured language and wire its collaborators
    ///
    /// # Errors
    ///
    /// * [`EngineError::Config`] for an invalid configuration
    /// * [`EngineError::Core`] when the language or variant is not registered
    /// * [`EngineError::UnresolvedRule`] when the language names an unknown rule
    /// * [`EngineError::MissingWordTokenizer`] when no word tokenizer is available
    pub fn new(
        registry: &LanguageRegistry,
        catalog: &RuleCatalog,
        config: PipelineConfig,
    ) -> Result<Self> {
        config.validate()?;

        let language = registry.resolve(&config.language, config.country.as_deref())?;
        let rules = catalog.resolve(language.as_ref())?;
        let tokenizer = registry
            .word_tokenizer(language.as_ref())
            .ok_or_else(|| EngineError::MissingWordTokenizer(language.short_code().to_string()))?;

        tracing::info!(
            language = language.short_code(),
            rules = rules.len(),
            mode = ?config.execution_mode,
            "pipeline ready"
        );

        Ok(Self {
            tagger: language.tagger(),
            splitter: language.sentence_splitter(),
            tokenizer,
            rules,
            language,
            config,
        })
    }

    /// The language this pipeline analyzes
    pub fn language(&self) -> &Arc<dyn Language> {
        &self.language
    }

    /// Resolved rules, in the language's order
    pub fn rules(&self) -> &[Arc<dyn RuleDescriptor>] {
        &self.rules
    }

    /// The configuration the pipeline was built with
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Split `text` into sentences and analyze each of them
    ///
    /// Output order follows the input regardless of execution mode.
    pub fn analyze(&self, text: &str) -> Result<Vec<AnalyzedSentence>> {
        let sentences = self.splitter.split(text);

        if self.use_parallel(sentences.len()) {
            self.analyze_parallel(sentences)
        } else {
            sentences
                .into_iter()
                .map(|sentence| self.analyze_sentence(sentence))
                .collect()
        }
    }

    /// Analyze text already known to be a single sentence
    pub fn analyze_sentence(&self, sentence: String) -> Result<AnalyzedSentence> {
        let spans = self.tokenizer.split(&sentence);
        let mut tokens = Vec::with_capacity(spans.len() + 1);
        tokens.push(TokenReadings::single(AnalyzedToken::sentence_start(), 0));

        let mut offset = 0;
        let mut whitespace_before = false;
        for span in spans {
            let mut readings = self.tag_span(&span, offset)?;
            readings.set_whitespace_before(whitespace_before);
            whitespace_before = readings.is_whitespace();
            offset += span.len();
            tokens.push(readings);
        }

        Ok(AnalyzedSentence::new(sentence, tokens))
    }

    fn tag_span(&self, span: &str, offset: usize) -> Result<TokenReadings> {
        if span.chars().all(char::is_whitespace) {
            return Ok(TokenReadings::single(AnalyzedToken::untagged(span), offset));
        }

        // Readings always carry the span text, whatever surface the tagger reports
        let readings: Vec<AnalyzedToken> = self
            .tagger
            .tag(span)
            .into_iter()
            .map(|r| {
                AnalyzedToken::new(
                    span,
                    r.pos_tag().map(str::to_string),
                    r.lemma().map(str::to_string),
                )
            })
            .collect();

        if readings.is_empty() {
            return Ok(TokenReadings::single(AnalyzedToken::untagged(span), offset));
        }
        Ok(TokenReadings::new(readings, offset)?)
    }

    fn use_parallel(&self, sentences: usize) -> bool {
        match self.config.execution_mode {
            ExecutionMode::Sequential => false,
            ExecutionMode::Parallel => sentences > 1,
            ExecutionMode::Adaptive => sentences >= self.config.parallel_threshold,
        }
    }

    #[cfg(feature = "parallel")]
    fn analyze_parallel(&self, sentences: Vec<String>) -> Result<Vec<AnalyzedSentence>> {
        use rayon::prelude::*;

        tracing::debug!(sentences = sentences.len(), "analyzing in parallel");
        sentences
            .into_par_iter()
            .map(|sentence| self.analyze_sentence(sentence))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn analyze_parallel(&self, sentences: Vec<String>) -> Result<Vec<AnalyzedSentence>> {
        tracing::debug!("parallel feature disabled, analyzing sequentially");
        sentences
            .into_iter()
            .map(|sentence| self.analyze_sentence(sentence))
            .collect()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("language", &self.language.short_code())
            .field("rules", &self.rules.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyglint_core::{LanguageDescriptor, PassThroughTagger, RuleId, WordTokenizer};

    struct WholeText;

    impl SentenceSplitter for WholeText {
        fn split(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }
    }

    /// Tags "the" twice and reports a different surface
    struct OddTagger;

    impl Tagger for OddTagger {
        fn tag(&self, word: &str) -> Vec<AnalyzedToken> {
            match word {
                "the" => vec![
                    AnalyzedToken::new("THE", Some("DT".into()), Some("the".into())),
                    AnalyzedToken::new("THE", Some("PRON".into()), None),
                ],
                _ => Vec::new(),
            }
        }
    }

    fn registry(tagger: Arc<dyn Tagger>, with_tokenizer: bool) -> LanguageRegistry {
        let language = LanguageDescriptor::builder("tx", "Test")
            .tagger(tagger)
            .sentence_splitter(Arc::new(WholeText))
            .rule(RuleId::WHITESPACE_RULE)
            .build()
            .unwrap();

        let mut registry = if with_tokenizer {
            LanguageRegistry::new().with_default_word_tokenizer(Arc::new(WordTokenizer))
        } else {
            LanguageRegistry::new()
        };
        registry.register(language).unwrap();
        registry
    }

    #[test]
    fn test_span_readings() {
        let registry = registry(Arc::new(OddTagger), true);
        let pipeline =
            Pipeline::new(&registry, &RuleCatalog::standard(), PipelineConfig::new("tx")).unwrap();

        let sentence = pipeline.analyze_sentence("the cat".to_string()).unwrap();
        let tokens = sentence.tokens();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is_sentence_start());

        assert_eq!(tokens[1].surface(), "the");
        assert_eq!(tokens[1].len(), 2);
        assert!(tokens[1].has_lemma("the"));
        assert!(tokens[1].has_pos_tag("PRON"));

        assert!(tokens[2].is_whitespace());
        assert_eq!(tokens[3].surface(), "cat");
        assert_eq!(tokens[3].start(), 4);
        assert!(tokens[3].is_whitespace_before());
        assert!(!tokens[1].is_whitespace_before());
    }

    #[test]
    fn test_missing_word_tokenizer() {
        let registry = registry(Arc::new(PassThroughTagger), false);
        let result = Pipeline::new(&registry, &RuleCatalog::standard(), PipelineConfig::new("tx"));
        assert!(matches!(result, Err(EngineError::MissingWordTokenizer(code)) if code == "tx"));
    }

    #[test]
    fn test_invalid_config_rejected_before_lookup() {
        let registry = registry(Arc::new(PassThroughTagger), true);
        let mut config = PipelineConfig::new("tx");
        config.parallel_threshold = 0;
        let result = Pipeline::new(&registry, &RuleCatalog::standard(), config);
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
