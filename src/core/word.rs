//! Word representation
//!
//! A Word is an uppercase sequence of letters. Secret words and guesses are both
//! Words; the session checks them against the configured word length.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Longest word the board supports
pub const MAX_WORD_LENGTH: usize = 12;

/// An uppercase word made of [`Letter`]s
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must be at most 12 letters, got {0}")]
    TooLong(usize),
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and uppercase-normalized.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, longer than
    /// [`MAX_WORD_LENGTH`], or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(|ch| Letter::from_char(ch).ok_or(WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        if letters.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(letters.len()));
        }

        Ok(Self::from_letters(letters))
    }

    /// Create a Word and require an exact length
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` when the word has the wrong number of
    /// letters, or any error [`Word::new`] would return.
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Build a Word from letters already entered on the board
    #[must_use]
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        let text = letters.iter().map(|l| l.to_char()).collect();
        Self { text, letters }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a validated word; present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Count of each letter in the word
    ///
    /// Used by evaluation to handle duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(
            word.letters(),
            &[Letter::C, Letter::R, Letter::A, Letter::N, Letter::E]
        );
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "CRANE");
        assert_eq!(Word::new("  crane\n").unwrap().text(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacter('!')));
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert_eq!(
            Word::with_length("toolong", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 7
            })
        );
        assert!(Word::with_length("cat", 3).is_ok());
    }

    #[test]
    fn word_from_letters_builds_text() {
        let word = Word::from_letters(vec![Letter::P, Letter::A, Letter::P, Letter::E, Letter::R]);
        assert_eq!(word.text(), "PAPER");
        assert_eq!(word, Word::new("paper").unwrap());
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&Letter::S), Some(&1));
        assert_eq!(counts.get(&Letter::P), Some(&1));
        assert_eq!(counts.get(&Letter::E), Some(&2));
        assert_eq!(counts.get(&Letter::D), Some(&1));
        assert_eq!(counts.get(&Letter::Z), None);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let counts = Word::new("aaaaa").unwrap().letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&Letter::A), Some(&5));
    }

    #[test]
    fn word_length_is_capped() {
        assert!(Word::new("a".repeat(MAX_WORD_LENGTH)).is_ok());
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::TooLong(13))
        );
        assert_eq!(Word::new("a".repeat(256)), Err(WordError::TooLong(256)));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }
}
