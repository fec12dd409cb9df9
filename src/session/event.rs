//! Events consumed by the session and effects it produces

use crate::core::{Letter, Verdict, Word};
use thiserror::Error;

/// A player key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(Letter),
    Delete,
    Submit,
}

impl Input {
    /// Map a typed character to an input, ignoring anything that isn't a letter
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match Letter::from_char(ch) {
            Some(letter) => Some(Self::Letter(letter)),
            None => None,
        }
    }
}

/// Result of checking a guess against the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    Rejected,
    /// The validator could not be reached or answered ambiguously
    Unavailable,
}

/// Everything that can change a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Input(Input),
    /// Answer to an earlier [`Effect::Validate`] for `guess`
    Validated { guess: Word, outcome: Validation },
    /// Start over with a fresh secret word
    Reset(Word),
}

impl From<Input> for Event {
    fn from(input: Input) -> Self {
        Self::Input(input)
    }
}

/// Why a submitted row was sent back to the player
///
/// None of these end the session; the typed letters stay on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    WordNotAccepted,
    #[error("Error checking word")]
    ValidationUnavailable,
}

impl TurnError {
    /// Stable short code for the rejection
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IncompleteGuess => "too-short",
            Self::WordNotAccepted => "not-a-word",
            Self::ValidationUnavailable => "validation-error",
        }
    }
}

/// One-way notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    LetterEntered { row: usize, col: usize, letter: Letter },
    LetterCleared { row: usize, col: usize },
    RowRejected(TurnError),
    RowEvaluated { row: usize, verdicts: Vec<Verdict> },
    KeyboardMarkUpdated { letter: Letter, verdict: Verdict },
    GameWon(Word),
    GameLost(Word),
    SessionReset,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Emit(Signal),
    /// Ask the word validator about this guess and feed back [`Event::Validated`]
    Validate(Word),
}
