use std::collections::HashMap;

/// Trie node for abbreviation lookup
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Whether this node represents the end of an abbreviation
    is_end: bool,
}

/// Case-insensitive trie of abbreviations written without their final dot
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTrie {
    root: TrieNode,
    len: usize,
}

impl AbbreviationTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert an abbreviation; a trailing dot is ignored
    pub fn insert(&mut self, abbreviation: &str) {
        let normalized = abbreviation.trim_end_matches('.').to_lowercase();
        if normalized.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in normalized.chars() {
            current = current.children.entry(ch).or_default();
        }

        if !current.is_end {
            self.len += 1;
        }
        current.is_end = true;
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut current = &self.root;
        for ch in word.chars().flat_map(char::to_lowercase) {
            match current.children.get(&ch) {
                Some(next) => current = next,
                None => return false,
            }
        }
        current.is_end
    }

    /// Whether the word ending right before the dot at `dot_pos` is an abbreviation
    ///
    /// `dot_pos` is a byte offset into `text`. The word is the run of
    /// non-whitespace characters before the dot, with leading opening brackets
    /// and quotes stripped.
    pub fn ends_abbreviation(&self, text: &str, dot_pos: usize) -> bool {
        if self.is_empty() || dot_pos == 0 || dot_pos > text.len() {
            return false;
        }

        let before = &text[..dot_pos];
        let word_start = before
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_whitespace())
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(0);

        let word = before[word_start..].trim_start_matches(|c: char| !c.is_alphanumeric());
        !word.is_empty() && self.contains(word)
    }
}
