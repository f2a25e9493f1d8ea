use crate::config::LanguageConfig;
use crate::error::{LanguageError, Result};
use crate::splitter::RuleBasedSentenceSplitter;
use polyglint_core::{
    Contributor, CountryVariants, Language, LanguageDescriptor, Locale, ManualTagger,
    PassThroughTagger, RuleId, SentenceSplitter, SymbolPair, SymbolPairs, Tagger, Tokenizer,
};
use std::path::Path;
use std::sync::Arc;

/// Language defined by a TOML configuration file
///
/// The configuration supplies metadata, bracket pairing, rule identities,
/// sentence splitting settings and optionally a tagger lexicon. Languages
/// without a lexicon get a [`PassThroughTagger`].
#[derive(Debug)]
pub struct ConfigurableLanguage {
    descriptor: LanguageDescriptor,
    config: LanguageConfig,
}

impl ConfigurableLanguage {
    /// Parse and build a language from TOML text
    ///
    /// A relative lexicon path is resolved against the working directory.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(content)
            .map_err(|e| LanguageError::Configuration(format!("Failed to parse TOML: {e}")))?;
        Self::from_config(config, None)
    }

    /// Create a language from an external file
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LanguageError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: LanguageConfig = toml::from_str(&content).map_err(|e| {
            LanguageError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Override language code if provided
        if let Some(code) = language_code {
            config.metadata.code = code.to_string();
            if let Some(locale) = config.locale().ok().filter(|l| l.language() != code) {
                config.metadata.locale =
                    Some(Locale::new(code, locale.country().map(str::to_string)).to_string());
            }
        }

        tracing::debug!(path = %path.display(), code = %config.metadata.code, "loaded language config");
        Self::from_config(config, path.parent())
    }

    /// Build with the tagger described by the configuration
    pub fn from_config(config: LanguageConfig, base_dir: Option<&Path>) -> Result<Self> {
        config.validate()?;
        let tagger = load_tagger(&config, base_dir)?;
        Self::with_tagger(config, tagger)
    }

    /// Build with an explicitly supplied tagger
    pub fn with_tagger(config: LanguageConfig, tagger: Arc<dyn Tagger>) -> Result<Self> {
        config.validate()?;

        let splitter_config = &config.splitter;
        let symbols = config.symbols.as_ref().map(|s| {
            SymbolPairs::from_pairs(
                s.pairs
                    .iter()
                    .map(|p| SymbolPair::new(p.start.clone(), p.end.clone()))
                    .collect(),
            )
        });

        let mut splitter = RuleBasedSentenceSplitter::builder()
            .terminators(splitter_config.terminators.iter().copied())
            .abbreviation_categories(&splitter_config.abbreviations)
            .paragraph_breaks(splitter_config.paragraph_breaks)
            .initials(splitter_config.initials);
        if let Some(symbols) = &symbols {
            splitter = splitter.closing_symbols(symbols);
        }
        let splitter: Arc<dyn SentenceSplitter> = Arc::new(splitter.build());

        let mut builder = LanguageDescriptor::builder(
            config.metadata.code.clone(),
            config.metadata.name.clone(),
        )
        .locale(config.locale()?)
        .countries(CountryVariants::from_codes(
            config.metadata.countries.iter().cloned(),
        ))
        .tagger(tagger)
        .sentence_splitter(splitter)
        .rules(config.rules.ids.iter().map(|id| RuleId::new(id.clone())));

        if let Some(symbols) = symbols {
            builder = builder.unpaired_symbols(symbols);
        }

        for maintainer in &config.maintainers {
            let mut contributor = Contributor::new(maintainer.name.clone());
            if let Some(url) = &maintainer.url {
                contributor = contributor.with_url(url.clone());
            }
            if let Some(remark) = &maintainer.remark {
                contributor = contributor.with_remark(remark.clone());
            }
            builder = builder.maintainer(contributor);
        }

        Ok(Self {
            descriptor: builder.build()?,
            config,
        })
    }

    /// The configuration this language was built from
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    pub fn into_descriptor(self) -> LanguageDescriptor {
        self.descriptor
    }
}

fn load_tagger(config: &LanguageConfig, base_dir: Option<&Path>) -> Result<Arc<dyn Tagger>> {
    let Some(lexicon) = &config.tagger.lexicon else {
        return Ok(Arc::new(PassThroughTagger));
    };

    let path = match base_dir {
        Some(dir) if lexicon.is_relative() => dir.join(lexicon),
        _ => lexicon.clone(),
    };

    let content = std::fs::read_to_string(&path).map_err(|e| {
        LanguageError::Configuration(format!(
            "Failed to read lexicon '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Arc::new(ManualTagger::from_lexicon(&content)?))
}

impl Language for ConfigurableLanguage {
    fn locale(&self) -> Locale {
        self.descriptor.locale()
    }

    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn short_code(&self) -> &str {
        self.descriptor.short_code()
    }

    fn country_variants(&self) -> &CountryVariants {
        self.descriptor.country_variants()
    }

    fn unpaired_symbols(&self) -> &SymbolPairs {
        self.descriptor.unpaired_symbols()
    }

    fn tagger(&self) -> Arc<dyn Tagger> {
        self.descriptor.tagger()
    }

    fn word_tokenizer(&self) -> Option<Arc<dyn Tokenizer>> {
        self.descriptor.word_tokenizer()
    }

    fn sentence_splitter(&self) -> Arc<dyn SentenceSplitter> {
        self.descriptor.sentence_splitter()
    }

    fn relevant_rules(&self) -> &[RuleId] {
        self.descriptor.relevant_rules()
    }

    fn maintainers(&self) -> &[Contributor] {
        self.descriptor.maintainers()
    }
}
