//! Rule identities
//!
//! A language only names the checks that apply to it. Turning a name into an
//! executable rule is the job of the pipeline's rule catalog.

use std::borrow::Cow;
use std::fmt;

/// Stable identity of a grammar or style rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleId(Cow<'static, str>);

impl RuleId {
    /// Missing space after a comma, or a space inside parentheses
    pub const COMMA_PARENTHESIS_WHITESPACE: RuleId = RuleId::fixed("COMMA_PARENTHESIS_WHITESPACE");
    /// Two consecutive dots or commas
    pub const DOUBLE_PUNCTUATION: RuleId = RuleId::fixed("DOUBLE_PUNCTUATION");
    /// Opening bracket or quote without its closing counterpart
    pub const UNPAIRED_BRACKETS: RuleId = RuleId::fixed("UNPAIRED_BRACKETS");
    /// Sentence starting with a lowercase letter
    pub const UPPERCASE_SENTENCE_START: RuleId = RuleId::fixed("UPPERCASE_SENTENCE_START");
    /// Repeated whitespace between words
    pub const WHITESPACE_RULE: RuleId = RuleId::fixed("WHITESPACE_RULE");
    /// The same word twice in a row
    pub const WORD_REPEAT_RULE: RuleId = RuleId::fixed("WORD_REPEAT_RULE");

    pub const fn fixed(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_owned_ids_compare_equal() {
        assert_eq!(RuleId::WORD_REPEAT_RULE, RuleId::from("WORD_REPEAT_RULE"));
        assert_eq!(RuleId::UNPAIRED_BRACKETS.as_str(), "UNPAIRED_BRACKETS");
    }

    #[test]
    fn test_display() {
        assert_eq!(RuleId::WHITESPACE_RULE.to_string(), "WHITESPACE_RULE");
    }
}
