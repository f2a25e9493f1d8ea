//! Catalog of supported languages
//!
//! The registry is populated once at startup through `&mut self` and then
//! shared read-only (typically behind an `Arc`). Lookups never mutate it.

use crate::error::{CoreError, Result};
use crate::language::Language;
use crate::locale::Locale;
use crate::tokenizer::Tokenizer;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Languages keyed by short code
#[derive(Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Arc<dyn Language>>,
    default_word_tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl LanguageRegistry {
    /// Create an empty registry without a default word tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer used for languages that do not bring their own
    pub fn with_default_word_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.default_word_tokenizer = Some(tokenizer);
        self
    }

    /// Register a language
    ///
    /// Fails with [`CoreError::DuplicateLanguage`] when the short code is
    /// taken; the earlier registration is kept.
    pub fn register(&mut self, language: impl Language + 'static) -> Result<()> {
        self.register_shared(Arc::new(language))
    }

    /// Register an already shared language
    pub fn register_shared(&mut self, language: Arc<dyn Language>) -> Result<()> {
        let code = language.short_code().to_string();

        if self.languages.contains_key(&code) {
            tracing::debug!(code = %code, "rejected duplicate language registration");
            return Err(CoreError::DuplicateLanguage(code));
        }

        tracing::debug!(
            code = %code,
            name = language.name(),
            rules = language.relevant_rules().len(),
            "registered language"
        );
        self.languages.insert(code, language);
        Ok(())
    }

    /// Resolve a short code, optionally checking a country variant
    pub fn resolve(&self, code: &str, country: Option<&str>) -> Result<Arc<dyn Language>> {
        let language = self
            .languages
            .get(code)
            .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))?;

        if let Some(country) = country {
            if !language.country_variants().contains(country) {
                return Err(CoreError::UnsupportedVariant {
                    code: code.to_string(),
                    country: country.to_string(),
                });
            }
        }

        Ok(Arc::clone(language))
    }

    /// Resolve a locale: its language part is the short code, its region the variant
    pub fn by_locale(&self, locale: &Locale) -> Result<Arc<dyn Language>> {
        self.resolve(locale.language(), locale.country())
    }

    /// Find a language by its display name, ignoring case
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn Language>> {
        self.languages
            .values()
            .find(|l| l.name().to_lowercase() == name.to_lowercase())
            .cloned()
    }

    pub fn get(&self, code: &str) -> Option<Arc<dyn Language>> {
        self.languages.get(code).cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// Registered languages ordered by short code
    pub fn languages(&self) -> impl Iterator<Item = &Arc<dyn Language>> + '_ {
        self.languages.values()
    }

    /// Registered short codes in order
    pub fn codes(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// The registry's fallback tokenizer, if one is configured
    pub fn default_word_tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        self.default_word_tokenizer.clone()
    }

    /// Word tokenizer for `language`: its own, else the registry default
    pub fn word_tokenizer(&self, language: &dyn Language) -> Option<Arc<dyn Tokenizer>> {
        language
            .word_tokenizer()
            .or_else(|| self.default_word_tokenizer.clone())
    }
}

impl fmt::Debug for LanguageRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageRegistry")
            .field("languages", &self.codes())
            .field(
                "default_word_tokenizer",
                &self.default_word_tokenizer.is_some(),
            )
            .finish()
    }
}
