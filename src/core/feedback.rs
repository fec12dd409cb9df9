//! Guess evaluation and per-letter feedback
//!
//! Each guessed letter receives a [`Verdict`]:
//! - Absent (letter not in the secret, or already used up by other positions)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the right position)

use super::{Letter, Word};
use std::fmt;

/// Feedback for a single letter position
///
/// Ordered from worst to best, so `max` picks the stronger mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji tile for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// The verdicts for one evaluated guess, in position order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// This implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count each letter in the secret
    /// 2. First pass: mark exact matches Correct and remove them from the pool
    /// 3. Second pass, left to right: mark Present while the pool still holds
    ///    that letter, otherwise Absent
    ///
    /// Both words must have the same length; the session guarantees this.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// use Verdict::*;
    /// assert_eq!(feedback.verdicts(), &[Present, Present, Correct, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "words must be the same length");

        let mut result = vec![Verdict::Absent; guess.len()];
        let mut available = secret.letter_counts();
        let mut matched = vec![false; guess.len()];

        // First pass: exact position matches
        for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                result[i] = Verdict::Correct;
                matched[i] = true;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, letter) in guess.letters().iter().enumerate() {
            if matched[i] {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// An evaluated guess: each letter paired with its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    guess: Word,
    feedback: Feedback,
}

impl GuessRow {
    /// Evaluate a guess into a row
    #[must_use]
    pub fn evaluate(guess: Word, secret: &Word) -> Self {
        let feedback = Feedback::evaluate(&guess, secret);
        Self { guess, feedback }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// (letter, verdict) pairs in position order
    pub fn tiles(&self) -> impl Iterator<Item = (Letter, Verdict)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.feedback.verdicts().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn eval(guess: &str, secret: &str) -> Vec<Verdict> {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::evaluate(&guess, &secret).verdicts().to_vec()
    }

    #[test]
    fn verdict_ordering_prefers_correct() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn duplicate_guess_letter_with_single_remaining_in_secret() {
        // APPLE has two Ps; PAPER's P at index 2 is exact, the one at index 0
        // takes the remaining P.
        assert_eq!(
            eval("paper", "apple"),
            vec![Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn exact_match_is_all_correct() {
        for word in ["crane", "slate", "apple", "zzzzz", "aaaaa"] {
            let verdicts = eval(word, word);
            assert!(verdicts.iter().all(|&v| v == Correct), "{word}");
        }
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        assert_eq!(eval("abcde", "fghij"), vec![Absent; 5]);
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O is present, second O is exact
        assert_eq!(
            eval("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn surplus_duplicates_are_absent_left_to_right() {
        // SPEED vs ERASE: both Es are present, ERASE has two
        assert_eq!(
            eval("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
        // EERIE vs THOSE: only one E in the secret, and it is matched exactly
        assert_eq!(
            eval("eerie", "those"),
            vec![Absent, Absent, Absent, Absent, Correct]
        );
        // LLAMA vs HELLO: two Ls, neither in place
        assert_eq!(
            eval("llama", "hello"),
            vec![Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn crane_against_slate() {
        assert_eq!(
            eval("crane", "slate"),
            vec![Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn works_for_other_lengths() {
        assert_eq!(eval("tac", "cat"), vec![Present, Correct, Present]);
        assert_eq!(eval("ab", "ab"), vec![Correct, Correct]);
    }

    #[test]
    fn feedback_is_solved_and_emoji() {
        let guess = Word::new("robot").unwrap();
        let secret = Word::new("floor").unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);
        assert!(!feedback.is_solved());
        assert_eq!(feedback.to_emoji(), "🟨🟨⬛🟩⬛");
        assert_eq!(feedback.to_string(), feedback.to_emoji());

        let solved = Feedback::evaluate(&secret, &secret);
        assert!(solved.is_solved());
    }

    #[test]
    fn guess_row_tiles_pair_letters_with_verdicts() {
        let secret = Word::new("apple").unwrap();
        let row = GuessRow::evaluate(Word::new("paper").unwrap(), &secret);
        let tiles: Vec<_> = row.tiles().collect();
        assert_eq!(tiles[0], (Letter::P, Present));
        assert_eq!(tiles[2], (Letter::P, Correct));
        assert_eq!(tiles[4], (Letter::R, Absent));
        assert_eq!(row.guess().text(), "PAPER");
    }
}
