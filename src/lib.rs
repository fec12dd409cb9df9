//! Wordle Game
//!
//! A word-guessing game with a pure evaluation engine, an event-driven session
//! state machine, and pluggable word providers and validators.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Verdict, Word};
//!
//! let guess = Word::new("paper").unwrap();
//! let secret = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! assert_eq!(feedback.verdicts()[2], Verdict::Correct);
//! assert_eq!(feedback.to_emoji(), "🟨🟨🟩🟨⬛");
//! ```

// Core domain types
pub mod core;

// Session state machine and controller
pub mod session;

// Secret word providers and guess validators
pub mod sources;

// Word lists
pub mod wordlists;

// Win/loss statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
