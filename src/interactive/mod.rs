//! Interactive TUI mode
//!
//! Full-screen game board driven by keyboard events and controller signals.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
