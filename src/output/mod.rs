//! Terminal output formatting
//!
//! Coloured tiles, keyboard, share grid and statistics for the CLI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_feedback, print_keyboard, print_statistics};
