//! Data-backed language descriptor
//!
//! [`LanguageDescriptor`] is the generic [`Language`] implementation used for
//! languages assembled at runtime, e.g. from a configuration file. Built-in
//! languages usually implement [`Language`] directly instead.

use crate::error::{CoreError, Result};
use crate::language::{Contributor, Language};
use crate::locale::{CountryVariants, Locale};
use crate::rule::RuleId;
use crate::symbols::SymbolPairs;
use crate::tagger::Tagger;
use crate::tokenizer::{SentenceSplitter, Tokenizer};
use std::fmt;
use std::sync::Arc;

/// A language assembled from plain values
pub struct LanguageDescriptor {
    code: String,
    name: String,
    locale: Locale,
    countries: CountryVariants,
    symbols: Option<SymbolPairs>,
    tagger: Arc<dyn Tagger>,
    word_tokenizer: Option<Arc<dyn Tokenizer>>,
    sentence_splitter: Arc<dyn SentenceSplitter>,
    rules: Vec<RuleId>,
    maintainers: Vec<Contributor>,
}

impl LanguageDescriptor {
    /// Start building a descriptor for `code`
    pub fn builder(code: impl Into<String>, name: impl Into<String>) -> LanguageDescriptorBuilder {
        LanguageDescriptorBuilder::new(code, name)
    }
}

impl Language for LanguageDescriptor {
    fn locale(&self) -> Locale {
        self.locale.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn short_code(&self) -> &str {
        &self.code
    }

    fn country_variants(&self) -> &CountryVariants {
        &self.countries
    }

    fn unpaired_symbols(&self) -> &SymbolPairs {
        match &self.symbols {
            Some(symbols) => symbols,
            None => &crate::symbols::DEFAULT_SYMBOL_PAIRS,
        }
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        Arc::clone(&self.tagger)
    }

    fn word_tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        self.word_tokenizer.clone()
    }

    fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter> {
        Arc::clone(&self.sentence_splitter)
    }

    fn relevant_rules(&self) -> &[RuleId] {
        &self.rules
    }

    fn maintainers(&self) -> &[Contributor] {
        &self.maintainers
    }
}

impl fmt::Debug for LanguageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageDescriptor")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("locale", &self.locale)
            .field("countries", &self.countries)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`LanguageDescriptor`]
pub struct LanguageDescriptorBuilder {
    code: String,
    name: String,
    locale: Option<Locale>,
    countries: CountryVariants,
    symbols: Option<SymbolPairs>,
    tagger: Option<Arc<dyn Tagger>>,
    word_tokenizer: Option<Arc<dyn Tokenizer>>,
    sentence_splitter: Option<Arc<dyn SentenceSplitter>>,
    rules: Vec<RuleId>,
    maintainers: Vec<Contributor>,
}

impl LanguageDescriptorBuilder {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            locale: None,
            countries: CountryVariants::Any,
            symbols: None,
            tagger: None,
            word_tokenizer: None,
            sentence_splitter: None,
            rules: Vec::new(),
            maintainers: Vec::new(),
        }
    }

    /// Defaults to a region-less locale made of the short code
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Defaults to [`CountryVariants::Any`]
    pub fn countries(mut self, countries: CountryVariants) -> Self {
        self.countries = countries;
        self
    }

    /// Override the shared default bracket pairing
    pub fn unpaired_symbols(mut self, symbols: SymbolPairs) -> Self {
        self.symbols = Some(symbols);
        self
    }

    pub fn tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn word_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.word_tokenizer = Some(tokenizer);
        self
    }

    pub fn sentence_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.sentence_splitter = Some(splitter);
        self
    }

    /// Append a rule identity; order is execution order
    pub fn rule(mut self, rule: RuleId) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleId>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn maintainer(mut self, maintainer: Contributor) -> Self {
        self.maintainers.push(maintainer);
        self
    }

    /// Validate and build the descriptor
    pub fn build(self) -> Result<LanguageDescriptor> {
        if self.code.trim().is_empty() {
            return Err(CoreError::InvalidDescriptor(
                "short code must not be empty".into(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidDescriptor(format!(
                "language '{}' has an empty name",
                self.code
            )));
        }

        let tagger = self.tagger.ok_or_else(|| CoreError::MissingTagger {
            language: self.code.clone(),
        })?;

        let sentence_splitter =
            self.sentence_splitter
                .ok_or_else(|| CoreError::MissingSentenceSplitter {
                    language: self.code.clone(),
                })?;

        let locale = self
            .locale
            .unwrap_or_else(|| Locale::new(self.code.clone(), None));

        Ok(LanguageDescriptor {
            code: self.code,
            name: self.name,
            locale,
            countries: self.countries,
            symbols: self.symbols,
            tagger,
            word_tokenizer: self.word_tokenizer,
            sentence_splitter,
            rules: self.rules,
            maintainers: self.maintainers,
        })
    }
}
