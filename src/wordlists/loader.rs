//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and invalid entries are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse a newline separated word list
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "tw0", "", "slate", "o'neil"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let words = parse_words("# answers\ncrane\n\n  slate  \nbad1\n");
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
