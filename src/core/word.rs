//! Secret word representation
//!
//! A `SecretWord` stores an uppercase A-Z word along with letter position indices
//! so a guess can be revealed at every matching position in one lookup.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase hangman word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty after trimming
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("ruby").unwrap();
    /// assert_eq!(word.text(), "RUBY");
    ///
    /// assert!(SecretWord::new("two words").is_err());
    /// assert!(SecretWord::new("c0de").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("RUBY").unwrap();
        assert_eq!(word.text(), "RUBY");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = SecretWord::new("ruby").unwrap();
        assert_eq!(word.text(), "RUBY");

        let word2 = SecretWord::new("  RuBy\n").unwrap();
        assert_eq!(word2.text(), "RUBY");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(SecretWord::new("c0de"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("two words"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("rust!"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("código"), Err(WordError::NonAscii));
    }

    #[test]
    fn single_letter_word() {
        let word = SecretWord::new("a").unwrap();
        assert_eq!(word.len(), 1);
        assert_eq!(word.positions_of(b'A'), &[0]);
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("RUBY").unwrap();
        assert!(word.has_letter(b'R'));
        assert!(word.has_letter(b'Y'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'r'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("BANANA").unwrap();
        assert_eq!(word.positions_of(b'A'), &[1, 3, 5]);
        assert_eq!(word.positions_of(b'N'), &[2, 4]);
        assert_eq!(word.positions_of(b'B'), &[0]);
        assert!(word.positions_of(b'Z').is_empty());
    }

    #[test]
    fn word_char_at() {
        let word = SecretWord::new("GO").unwrap();
        assert_eq!(word.char_at(0), b'G');
        assert_eq!(word.char_at(1), b'O');
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("rust").unwrap();
        assert_eq!(format!("{word}"), "RUST");
    }
}
