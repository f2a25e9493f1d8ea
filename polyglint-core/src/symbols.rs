//! Paired punctuation symbols (brackets and quotes)
//!
//! The punctuation-balance check needs to know which opening symbol closes
//! with which. Symbols are stored as pairs, so the start and end sides always
//! have the same length and correspond index for index.

use crate::error::{CoreError, Result};
use std::borrow::Cow;

/// One opening symbol and the symbol that closes it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolPair {
    pub start: Cow<'static, str>,
    pub end: Cow<'static, str>,
}

impl SymbolPair {
    /// Pair built from static text, usable in `static` items
    pub const fn fixed(start: &'static str, end: &'static str) -> Self {
        Self {
            start: Cow::Borrowed(start),
            end: Cow::Borrowed(end),
        }
    }

    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Cow::Owned(start.into()),
            end: Cow::Owned(end.into()),
        }
    }

    /// Symmetric pairs (`"` … `"`) use the same symbol on both sides
    pub fn is_symmetric(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered set of symbol pairs for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPairs {
    pairs: Cow<'static, [SymbolPair]>,
}

static DEFAULT_PAIRS: [SymbolPair; 8] = [
    SymbolPair::fixed("[", "]"),
    SymbolPair::fixed("(", ")"),
    SymbolPair::fixed("{", "}"),
    SymbolPair::fixed("“", "”"),
    SymbolPair::fixed("«", "»"),
    SymbolPair::fixed("‘", "’"),
    SymbolPair::fixed("\"", "\""),
    SymbolPair::fixed("'", "'"),
];

/// Pairing used by every language that does not define its own
pub static DEFAULT_SYMBOL_PAIRS: SymbolPairs = SymbolPairs::fixed(&DEFAULT_PAIRS);

impl SymbolPairs {
    /// Pairs backed by a static table
    pub const fn fixed(pairs: &'static [SymbolPair]) -> Self {
        Self {
            pairs: Cow::Borrowed(pairs),
        }
    }

    pub fn from_pairs(pairs: Vec<SymbolPair>) -> Self {
        Self {
            pairs: Cow::Owned(pairs),
        }
    }

    /// Zip two parallel symbol lists, rejecting lists of different length
    pub fn from_parallel<S, E>(start: Vec<S>, end: Vec<E>) -> Result<Self>
    where
        S: Into<String>,
        E: Into<String>,
    {
        if start.len() != end.len() {
            return Err(CoreError::MismatchedSymbols {
                start: start.len(),
                end: end.len(),
            });
        }

        Ok(Self::from_pairs(
            start
                .into_iter()
                .zip(end)
                .map(|(s, e)| SymbolPair::new(s, e))
                .collect(),
        ))
    }

    pub fn pairs(&self) -> &[SymbolPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Opening symbols in pair order
    pub fn start_symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|p| p.start.as_ref())
    }

    /// Closing symbols in pair order
    pub fn end_symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|p| p.end.as_ref())
    }

    /// Closing symbol for an opening symbol
    pub fn end_for(&self, start: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.start == start)
            .map(|p| p.end.as_ref())
    }

    /// Opening symbol for a closing symbol
    pub fn start_for(&self, end: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.end == end)
            .map(|p| p.start.as_ref())
    }

    /// Index of the pair a symbol belongs to, from either side
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.pairs
            .iter()
            .position(|p| p.start == symbol || p.end == symbol)
    }

    /// Whether `symbol` closes some pair
    pub fn is_end_symbol(&self, symbol: &str) -> bool {
        self.pairs.iter().any(|p| p.end == symbol)
    }
}

impl Default for SymbolPairs {
    fn default() -> Self {
        DEFAULT_SYMBOL_PAIRS.clone()
    }
}
