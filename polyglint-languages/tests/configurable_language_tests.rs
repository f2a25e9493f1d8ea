use polyglint_core::{CountryVariants, Language, LanguageRegistry, RuleId};
use polyglint_languages::{ConfigurableLanguage, LanguageError};
use std::fs;
use tempfile::TempDir;

const ASTURIAN: &str = r#"
[metadata]
code = "ast"
name = "Asturian"
locale = "ast-ES"
countries = ["ES"]

[symbols]
pairs = [
    { start = "«", end = "»" },
    { start = "(", end = ")" },
]

[rules]
ids = ["WHITESPACE_RULE", "WORD_REPEAT_RULE"]

[splitter.abbreviations]
titles = ["Sr", "Sra"]

[tagger]
lexicon = "ast.tsv"

[[maintainers]]
name = "Xuan Pérez"
"#;

fn write_language(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("asturian.toml");
    fs::write(&path, ASTURIAN).unwrap();
    fs::write(dir.path().join("ast.tsv"), "casa\tcasa\tNCFS000\n").unwrap();
    path
}

#[test]
fn test_from_file_with_relative_lexicon() {
    let dir = TempDir::new().unwrap();
    let path = write_language(&dir);

    let language = ConfigurableLanguage::from_file(&path, None).unwrap();
    assert_eq!(language.short_code(), "ast");
    assert_eq!(language.locale().to_string(), "ast-ES");
    assert!(language.country_variants().contains("ES"));
    assert_eq!(language.unpaired_start_symbols(), vec!["«", "("]);
    assert_eq!(language.unpaired_end_symbols(), vec!["»", ")"]);
    assert_eq!(
        language.relevant_rules(),
        &[RuleId::WHITESPACE_RULE, RuleId::WORD_REPEAT_RULE]
    );
    assert_eq!(language.maintainers()[0].name, "Xuan Pérez");

    let readings = language.tagger().tag("casa");
    assert_eq!(readings[0].pos_tag(), Some("NCFS000"));

    let sentences = language.sentence_splitter().split("Vieno'l Sr. Díaz. Marchó.");
    assert_eq!(sentences, vec!["Vieno'l Sr. Díaz. ", "Marchó."]);
}

#[test]
fn test_from_file_code_override() {
    let dir = TempDir::new().unwrap();
    let path = write_language(&dir);

    let language = ConfigurableLanguage::from_file(&path, Some("xy")).unwrap();
    assert_eq!(language.short_code(), "xy");
    assert_eq!(language.locale().to_string(), "xy-ES");
}

#[test]
fn test_missing_lexicon_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("asturian.toml");
    fs::write(&path, ASTURIAN).unwrap();

    let result = ConfigurableLanguage::from_file(&path, None);
    assert!(matches!(result, Err(LanguageError::Configuration(msg)) if msg.contains("lexicon")));
}

#[test]
fn test_missing_file() {
    let result = ConfigurableLanguage::from_file(std::path::Path::new("/nonexistent/lang.toml"), None);
    assert!(matches!(result, Err(LanguageError::Configuration(_))));
}

#[test]
fn test_invalid_toml() {
    let result = ConfigurableLanguage::from_toml_str("[metadata\ncode = ");
    assert!(matches!(result, Err(LanguageError::Configuration(msg)) if msg.contains("TOML")));
}

#[test]
fn test_invalid_country_rejected() {
    let result = ConfigurableLanguage::from_toml_str(
        r#"
        [metadata]
        code = "eo"
        name = "Esperanto"
        countries = ["world"]
        "#,
    );
    assert!(matches!(result, Err(LanguageError::Configuration(_))));
}

#[test]
fn test_minimal_language_registers() {
    let language = ConfigurableLanguage::from_toml_str(
        r#"
        [metadata]
        code = "eo"
        name = "Esperanto"
        "#,
    )
    .unwrap();

    assert_eq!(language.country_variants(), &CountryVariants::Any);
    assert_eq!(language.tagger().tag("saluton").len(), 1);

    let mut registry = LanguageRegistry::new();
    registry.register(language).unwrap();
    assert!(registry.resolve("eo", Some("FR")).is_ok());
}
