use crate::error::LanguageError;
use polyglint_core::{Locale, ANY_COUNTRY};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub symbols: Option<SymbolConfig>,
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub tagger: TaggerConfig,
    #[serde(default)]
    pub maintainers: Vec<MaintainerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    pub pairs: Vec<SymbolPairConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolPairConfig {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    #[serde(default = "default_true")]
    pub paragraph_breaks: bool,
    #[serde(default = "default_true")]
    pub initials: bool,
    #[serde(default)]
    pub abbreviations: HashMap<String, Vec<String>>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            paragraph_breaks: true,
            initials: true,
            abbreviations: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Tab-separated lexicon; relative paths are resolved against the config file
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintainerConfig {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

fn default_countries() -> Vec<String> {
    vec![ANY_COUNTRY.to_string()]
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!', '?', '…']
}

fn default_true() -> bool {
    true
}

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]{2,3}$").expect("valid language code pattern"))
}

fn country_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z]{2}$").expect("valid country pattern"))
}

fn rule_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid rule id pattern"))
}

impl LanguageConfig {
    /// Locale from the metadata, defaulting to the bare language code
    pub fn locale(&self) -> Result<Locale, LanguageError> {
        match &self.metadata.locale {
            Some(tag) => Locale::parse(tag).ok_or_else(|| {
                LanguageError::Configuration(format!("invalid locale '{tag}'"))
            }),
            None => Ok(Locale::new(self.metadata.code.clone(), None)),
        }
    }

    /// Check the configuration before a language is built from it
    pub fn validate(&self) -> Result<(), LanguageError> {
        let code = &self.metadata.code;

        if !code_pattern().is_match(code) {
            return Err(LanguageError::Configuration(format!(
                "language code '{code}' must be 2 or 3 lowercase letters"
            )));
        }

        if self.metadata.name.trim().is_empty() {
            return Err(LanguageError::Configuration(format!(
                "language '{code}' has an empty name"
            )));
        }

        let locale = self.locale()?;
        if locale.language() != code {
            return Err(LanguageError::Configuration(format!(
                "locale '{locale}' does not match language code '{code}'"
            )));
        }

        for country in &self.metadata.countries {
            if country != ANY_COUNTRY && !country_pattern().is_match(country) {
                return Err(LanguageError::Configuration(format!(
                    "invalid country code '{country}' for language '{code}'"
                )));
            }
        }

        if let Some(symbols) = &self.symbols {
            if let Some(pair) = symbols
                .pairs
                .iter()
                .find(|p| p.start.is_empty() || p.end.is_empty())
            {
                return Err(LanguageError::Configuration(format!(
                    "empty symbol in pair '{}' / '{}'",
                    pair.start, pair.end
                )));
            }
        }

        if let Some(id) = self.rules.ids.iter().find(|id| !rule_pattern().is_match(id)) {
            return Err(LanguageError::Configuration(format!(
                "invalid rule id '{id}'"
            )));
        }

        if self.splitter.terminators.is_empty() {
            return Err(LanguageError::Configuration(format!(
                "language '{code}' needs at least one sentence terminator"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASTURIAN: &str = r#"
        [metadata]
        code = "ast"
        name = "Asturian"
        locale = "ast-ES"
        countries = ["ES"]

        [symbols]
        pairs = [
            { start = "«", end = "»" },
            { start = "(", end = ")" }
        ]

        [rules]
        ids = ["WHITESPACE_RULE", "WORD_REPEAT_RULE"]

        [splitter]
        terminators = [".", "!", "?"]

        [splitter.abbreviations]
        titles = ["Sr", "Sra"]

        [[maintainers]]
        name = "Xuan Pérez"
        remark = "initial rules"
    "#;

    #[test]
    fn test_language_config_deserialize() {
        let config: LanguageConfig = toml::from_str(ASTURIAN).unwrap();

        assert_eq!(config.metadata.code, "ast");
        assert_eq!(config.metadata.countries, vec!["ES"]);
        assert_eq!(config.symbols.as_ref().unwrap().pairs.len(), 2);
        assert_eq!(config.rules.ids.len(), 2);
        assert_eq!(config.splitter.terminators, vec!['.', '!', '?']);
        assert!(config.splitter.paragraph_breaks);
        assert_eq!(config.splitter.abbreviations["titles"].len(), 2);
        assert_eq!(config.maintainers[0].remark.as_deref(), Some("initial rules"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config: LanguageConfig = toml::from_str(
            r#"
            [metadata]
            code = "eo"
            name = "Esperanto"
            "#,
        )
        .unwrap();

        assert_eq!(config.metadata.countries, vec!["ANY"]);
        assert!(config.symbols.is_none());
        assert!(config.rules.ids.is_empty());
        assert_eq!(config.splitter.terminators.len(), 4);
        assert!(config.tagger.lexicon.is_none());
        assert_eq!(config.locale().unwrap(), Locale::fixed("eo"));
        assert!(config.validate().is_ok());
    }

    fn invalid(edit: impl FnOnce(&mut LanguageConfig)) -> String {
        let mut config: LanguageConfig = toml::from_str(ASTURIAN).unwrap();
        edit(&mut config);
        match config.validate() {
            Err(LanguageError::Configuration(msg)) => msg,
            other => panic!("Expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_failures() {
        assert!(invalid(|c| c.metadata.code = "Asturian".into()).contains("lowercase"));
        assert!(invalid(|c| c.metadata.name = "".into()).contains("empty name"));
        assert!(invalid(|c| c.metadata.locale = Some("es-ES".into())).contains("does not match"));
        assert!(invalid(|c| c.metadata.locale = Some("ast-".into())).contains("invalid locale"));
        assert!(invalid(|c| c.metadata.countries = vec!["spain".into()]).contains("country"));
        assert!(invalid(|c| c.rules.ids.push("lower_case".into())).contains("rule id"));
        assert!(invalid(|c| c.splitter.terminators.clear()).contains("terminator"));
        assert!(invalid(|c| {
            c.symbols.as_mut().unwrap().pairs.push(SymbolPairConfig {
                start: "„".into(),
                end: "".into(),
            })
        })
        .contains("empty symbol"));
    }
}
