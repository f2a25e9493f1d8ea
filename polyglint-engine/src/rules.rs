//! Rule identities and their descriptors
//!
//! Languages refer to rules by [`RuleId`] only. The [`RuleCatalog`] maps those
//! identities to [`RuleDescriptor`] implementations and is consulted once,
//! when a pipeline is built, so a language naming an unknown rule never
//! reaches the analysis stage.

use crate::error::{EngineError, Result};
use polyglint_core::{Language, RuleId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An externally implemented checking rule
///
/// Only identity and description are needed here; matching logic lives with
/// the rule implementation.
pub trait RuleDescriptor: Send + Sync {
    /// Stable identity the rule is referenced by
    fn id(&self) -> &RuleId;

    /// Human-readable summary of what the rule checks
    fn description(&self) -> &str;
}

/// Rule descriptor carrying only its identity and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRule {
    id: RuleId,
    description: String,
}

impl NamedRule {
    /// Create a descriptor
    pub fn new(id: impl Into<RuleId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

impl RuleDescriptor for NamedRule {
    fn id(&self) -> &RuleId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for dyn RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("id", self.id())
            .finish()
    }
}

/// Lookup table from rule identity to descriptor
#[derive(Default)]
pub struct RuleCatalog {
    rules: HashMap<RuleId, Arc<dyn RuleDescriptor>>,
}

impl RuleCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the checks shared by most languages
    pub fn standard() -> Self {
        let standard = [
            (
                RuleId::COMMA_PARENTHESIS_WHITESPACE,
                "Whitespace before commas and inside parentheses",
            ),
            (RuleId::DOUBLE_PUNCTUATION, "Two consecutive dots or commas"),
            (RuleId::UNPAIRED_BRACKETS, "Brackets and quotes without a partner"),
            (
                RuleId::UPPERCASE_SENTENCE_START,
                "Sentence starting with a lowercase letter",
            ),
            (RuleId::WHITESPACE_RULE, "Repeated whitespace"),
            (RuleId::WORD_REPEAT_RULE, "The same word twice in a row"),
        ];

        let mut catalog = Self::new();
        for (id, description) in standard {
            catalog
                .rules
                .insert(id.clone(), Arc::new(NamedRule::new(id, description)));
        }
        catalog
    }

    /// Register a rule
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateRule`] if the identity is taken.
    pub fn register(&mut self, rule: impl RuleDescriptor + 'static) -> Result<()> {
        self.register_shared(Arc::new(rule))
    }

    /// Register an already shared rule
    pub fn register_shared(&mut self, rule: Arc<dyn RuleDescriptor>) -> Result<()> {
        let id = rule.id().clone();
        if self.rules.contains_key(&id) {
            return Err(EngineError::DuplicateRule(id));
        }
        tracing::debug!(rule = %id, "registered rule");
        self.rules.insert(id, rule);
        Ok(())
    }

    /// Look up one rule
    pub fn get(&self, id: &RuleId) -> Option<Arc<dyn RuleDescriptor>> {
        self.rules.get(id).cloned()
    }

    /// Whether a rule with this identity is registered
    pub fn contains(&self, id: &RuleId) -> bool {
        self.rules.contains_key(id)
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a language's rule identities, keeping their order
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnresolvedRule`] for the first identity that is
    /// not registered.
    pub fn resolve(&self, language: &dyn Language) -> Result<Vec<Arc<dyn RuleDescriptor>>> {
        language
            .relevant_rules()
            .iter()
            .map(|id| {
                self.get(id).ok_or_else(|| {
                    tracing::debug!(language = language.short_code(), rule = %id, "unresolved rule");
                    EngineError::UnresolvedRule {
                        language: language.short_code().to_string(),
                        rule: id.clone(),
                    }
                })
            })
            .collect()
    }
}

impl fmt::Debug for RuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.rules.keys().map(RuleId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("RuleCatalog").field("rules", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = RuleCatalog::standard();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.contains(&RuleId::WORD_REPEAT_RULE));
        assert_eq!(
            catalog.get(&RuleId::WHITESPACE_RULE).unwrap().description(),
            "Repeated whitespace"
        );
    }

    #[test]
    fn test_duplicate_rule() {
        let mut catalog = RuleCatalog::standard();
        let result = catalog.register(NamedRule::new(RuleId::WHITESPACE_RULE, "again"));
        assert_eq!(result, Err(EngineError::DuplicateRule(RuleId::WHITESPACE_RULE)));

        catalog
            .register(NamedRule::new("EN_A_VS_AN", "a versus an"))
            .unwrap();
        assert_eq!(catalog.len(), 7);
    }

    #[test]
    fn test_debug_lists_sorted_ids() {
        let mut catalog = RuleCatalog::new();
        catalog.register(NamedRule::new("B_RULE", "b")).unwrap();
        catalog.register(NamedRule::new("A_RULE", "a")).unwrap();
        assert_eq!(
            format!("{:?}", catalog),
            r#"RuleCatalog { rules: ["A_RULE", "B_RULE"] }"#
        );
    }
}
