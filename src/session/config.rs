//! Per-session game configuration

use thiserror::Error;

pub use crate::core::MAX_WORD_LENGTH;

/// Most rows the board supports
pub const MAX_ROWS: usize = 12;

/// Fixed shape of a session: word length and number of attempts
///
/// Chosen before a session starts and never changed while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

/// Error type for invalid configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Word length must be between 1 and 12, got {0}")]
    WordLength(usize),
    #[error("Max guesses must be between 1 and 12, got {0}")]
    MaxGuesses(usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
        }
    }
}

impl GameConfig {
    /// Create and validate a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero or above the board limits.
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        Self {
            word_length,
            max_guesses,
        }
        .validate()
    }

    /// Check the configuration against the board limits
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is out of range.
    pub const fn validate(self) -> Result<Self, ConfigError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength(self.word_length));
        }
        if self.max_guesses == 0 || self.max_guesses > MAX_ROWS {
            return Err(ConfigError::MaxGuesses(self.max_guesses));
        }
        Ok(self)
    }

    /// Index of the final row
    #[must_use]
    pub const fn last_row(self) -> usize {
        self.max_guesses - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.last_row(), 5);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::WordLength(0)));
        assert_eq!(GameConfig::new(13, 6), Err(ConfigError::WordLength(13)));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::MaxGuesses(0)));
        assert_eq!(GameConfig::new(5, 20), Err(ConfigError::MaxGuesses(20)));
    }

    #[test]
    fn accepts_custom_board() {
        let config = GameConfig::new(4, 3).unwrap();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.last_row(), 2);
    }
}
