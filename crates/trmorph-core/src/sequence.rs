// Character sequences over the Turkish alphabet

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::letter::{Character, turkish_lower};

/// An immutable run of characters with letter information resolved once.
///
/// Indices are character positions, not byte offsets.
#[derive(Clone)]
pub struct Sequence {
    text: String,
    chars: Vec<Character>,
    /// Byte offset of every character plus the total length.
    offsets: Vec<usize>,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, c) in text.char_indices() {
            chars.push(Character::new(c));
            offsets.push(offset);
        }
        offsets.push(text.len());
        Self { text: text.to_string(), chars, offsets }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[Character] {
        &self.chars
    }

    pub fn char_at(&self, index: usize) -> Option<&Character> {
        self.chars.get(index)
    }

    pub fn first_char(&self) -> Option<&Character> {
        self.chars.first()
    }

    pub fn last_char(&self) -> Option<&Character> {
        self.chars.last()
    }

    /// Last character that is a letter of the alphabet.
    pub fn last_letter(&self) -> Option<&Character> {
        self.chars.iter().rev().find(|c| c.is_letter())
    }

    pub fn first_letter(&self) -> Option<&Character> {
        self.chars.iter().find(|c| c.is_letter())
    }

    pub fn last_vowel(&self) -> Option<&Character> {
        self.chars.iter().rev().find(|c| c.is_vowel())
    }

    pub fn vowel_count(&self) -> usize {
        self.chars.iter().filter(|c| c.is_vowel()).count()
    }

    /// Byte offset of the character at `index` (or the total byte length
    /// when `index == len()`).
    pub fn byte_offset(&self, index: usize) -> usize {
        self.offsets[index.min(self.chars.len())]
    }

    /// Characters `start..end`, clamped to the sequence bounds.
    pub fn subsequence(&self, start: usize, end: usize) -> Sequence {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        Sequence::new(&self.text[self.offsets[start]..self.offsets[end]])
    }

    pub fn prefix(&self, len: usize) -> Sequence {
        self.subsequence(0, len)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Sequence with its last character replaced.
    pub fn with_last_char(&self, c: char) -> Sequence {
        let mut text = self.subsequence(0, self.len().saturating_sub(1)).text;
        text.push(c);
        Sequence::new(&text)
    }

    pub fn lowercased(&self) -> Sequence {
        Sequence::new(&self.text.chars().map(turkish_lower).collect::<String>())
    }
}

/// Byte length of the prefix of `text` that matches `prefix`, comparing
/// characters exactly or after Turkish lowercasing.
pub fn match_prefix(text: &str, prefix: &str, ignore_case: bool) -> Option<usize> {
    let mut consumed = 0;
    let mut text_chars = text.chars();
    for expected in prefix.chars() {
        let actual = text_chars.next()?;
        let same = if ignore_case {
            turkish_lower(actual) == turkish_lower(expected)
        } else {
            actual == expected
        };
        if !same {
            return None;
        }
        consumed += actual.len_utf8();
    }
    Some(consumed)
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Sequence {}

impl Hash for Sequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({:?})", self.text)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Sequence::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsequence_uses_character_positions() {
        let s = Sequence::new("ağaçlar");
        assert_eq!(s.len(), 7);
        assert_eq!(s.prefix(4).as_str(), "ağaç");
        assert_eq!(s.subsequence(4, 99).as_str(), "lar");
        assert_eq!(s.byte_offset(4), "ağaç".len());
    }

    #[test]
    fn last_letter_skips_punctuation() {
        let s = Sequence::new("Ali'");
        assert_eq!(s.last_char().map(|c| c.value()), Some('\''));
        assert_eq!(s.last_letter().map(|c| c.value()), Some('i'));
        assert_eq!(s.last_vowel().map(|c| c.value()), Some('i'));
    }

    #[test]
    fn prefix_matching_respects_turkish_case() {
        assert_eq!(match_prefix("LARI", "ları", true), Some(4));
        assert_eq!(match_prefix("LİR", "lır", true), None);
        assert_eq!(match_prefix("İstanbul", "is", true), Some("İs".len()));
        assert_eq!(match_prefix("Ali", "al", false), None);
        assert_eq!(match_prefix("la", "lar", true), None);
    }

    #[test]
    fn replace_last_char() {
        assert_eq!(Sequence::new("kitap").with_last_char('b').as_str(), "kitab");
    }
}
