//! Locale identifiers and country variants

use std::borrow::Cow;
use std::fmt;

/// Configuration spelling of the "any region" sentinel
pub const ANY_COUNTRY: &str = "ANY";

/// Language code optionally qualified by a region, e.g. `gl` or `de-AT`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Cow<'static, str>,
    country: Option<Cow<'static, str>>,
}

impl Locale {
    /// Region-less locale from static text
    pub const fn fixed(language: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            country: None,
        }
    }

    /// Region-qualified locale from static text
    pub const fn fixed_with_country(language: &'static str, country: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            country: Some(Cow::Borrowed(country)),
        }
    }

    pub fn new(language: impl Into<String>, country: Option<String>) -> Self {
        Self {
            language: Cow::Owned(language.into()),
            country: country.map(Cow::Owned),
        }
    }

    /// Parse `ll`, `ll-CC` or `ll_CC`
    ///
    /// Returns `None` for an empty language part or an empty region part.
    pub fn parse(tag: &str) -> Option<Self> {
        let mut parts = tag.splitn(2, ['-', '_']);
        let language = parts.next().filter(|l| !l.is_empty())?;

        match parts.next() {
            Some("") => None,
            Some(country) => Some(Self::new(language, Some(country.to_string()))),
            None => Some(Self::new(language, None)),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

/// Regions a language code is valid for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryVariants {
    /// The language has no regional distinction
    Any,
    /// Only these region codes
    Regions(Cow<'static, [Cow<'static, str>]>),
}

impl CountryVariants {
    /// Region list backed by a static table
    pub const fn fixed(regions: &'static [Cow<'static, str>]) -> Self {
        Self::Regions(Cow::Borrowed(regions))
    }

    /// Build from configuration values; an `ANY` entry or an empty list means any region
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();

        if codes.is_empty() || codes.iter().any(|c| c == ANY_COUNTRY) {
            Self::Any
        } else {
            Self::Regions(Cow::Owned(codes.into_iter().map(Cow::Owned).collect()))
        }
    }

    /// Whether `country` is an accepted variant
    pub fn contains(&self, country: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Regions(regions) => regions.iter().any(|r| r == country),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Explicit region codes; empty for [`CountryVariants::Any`]
    pub fn regions(&self) -> Vec<&str> {
        match self {
            Self::Any => Vec::new(),
            Self::Regions(regions) => regions.iter().map(|r| r.as_ref()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GALICIAN: [Cow<'static, str>; 1] = [Cow::Borrowed("ES")];

    #[test]
    fn test_parse_locale() {
        let locale = Locale::parse("de-AT").unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.country(), Some("AT"));

        let locale = Locale::parse("pt_BR").unwrap();
        assert_eq!(locale.to_string(), "pt-BR");

        let locale = Locale::parse("eo").unwrap();
        assert_eq!(locale.country(), None);
        assert_eq!(locale.to_string(), "eo");
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        assert!(Locale::parse("").is_none());
        assert!(Locale::parse("-ES").is_none());
        assert!(Locale::parse("gl-").is_none());
    }

    #[test]
    fn test_fixed_equals_owned() {
        assert_eq!(
            Locale::fixed_with_country("gl", "ES"),
            Locale::new("gl", Some("ES".to_string()))
        );
    }

    #[test]
    fn test_country_variants_contains() {
        let regions = CountryVariants::fixed(&GALICIAN);
        assert!(regions.contains("ES"));
        assert!(!regions.contains("FR"));
        assert!(CountryVariants::Any.contains("FR"));
    }

    #[test]
    fn test_from_codes_sentinel() {
        assert!(CountryVariants::from_codes(["ANY"]).is_any());
        assert!(CountryVariants::from_codes(Vec::<String>::new()).is_any());

        let regions = CountryVariants::from_codes(["DE", "AT", "CH"]);
        assert_eq!(regions.regions(), vec!["DE", "AT", "CH"]);
    }
}
