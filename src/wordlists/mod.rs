//! Embedded word lists
//!
//! Provides word lists compiled into the binary: the fallback vocabulary for
//! secret words and the local dictionary for offline validation.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
