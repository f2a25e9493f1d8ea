use std::collections::HashSet;

/// Characters that can end a sentence
#[derive(Debug, Clone)]
pub struct TerminatorRules {
    /// Set of terminator characters
    chars: HashSet<char>,
    /// ASCII lookup table for performance
    ascii_lookup: [bool; 128],
}

impl TerminatorRules {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let chars: HashSet<char> = chars.into_iter().collect();

        let mut ascii_lookup = [false; 128];
        for &ch in &chars {
            if ch.is_ascii() {
                ascii_lookup[ch as usize] = true;
            }
        }

        Self {
            chars,
            ascii_lookup,
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_lookup[ch as usize]
        } else {
            self.chars.contains(&ch)
        }
    }
}

impl Default for TerminatorRules {
    fn default() -> Self {
        Self::new(['.', '!', '?', '…'])
    }
}
