//! Core domain types for the game
//!
//! Letters, words, guess evaluation and keyboard aggregation. Everything here
//! is pure and synchronous; the session and the word services build on it.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::{Feedback, GuessRow, Verdict};
pub use keyboard::KeyboardMarks;
pub use letter::Letter;
pub use word::{MAX_WORD_LENGTH, Word, WordError};
