//! Guess validators
//!
//! A validator answers "is this a real word?". Transport problems are reported
//! as errors, distinct from a definite rejection.

use crate::core::Word;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// A definite answer from a validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    Accepted,
    Rejected,
}

/// Error type for validators that could not give a definite answer
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Dictionary request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Dictionary returned {0}")]
    Status(StatusCode),
}

/// Something that can decide whether a guess is an accepted word
#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Check a candidate guess
    async fn check(&self, candidate: &Word) -> Result<Acceptance, ValidatorError>;
}

/// Dictionary API client
///
/// Sends `GET <endpoint>/<word>`: success means the word exists, 404 means it
/// doesn't, and anything else is an error.
pub struct DictionaryApiValidator {
    http: Client,
    endpoint: String,
}

impl DictionaryApiValidator {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WordValidator for DictionaryApiValidator {
    async fn check(&self, candidate: &Word) -> Result<Acceptance, ValidatorError> {
        let url = format!("{}/{}", self.endpoint, candidate.text().to_lowercase());
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        debug!(%candidate, %status, "dictionary lookup");
        match status {
            s if s.is_success() => Ok(Acceptance::Accepted),
            StatusCode::NOT_FOUND => Ok(Acceptance::Rejected),
            other => Err(ValidatorError::Status(other)),
        }
    }
}

/// Offline validator backed by a fixed word list
pub struct WordListValidator {
    words: FxHashSet<Word>,
}

impl WordListValidator {
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordValidator for WordListValidator {
    async fn check(&self, candidate: &Word) -> Result<Acceptance, ValidatorError> {
        if self.contains(candidate) {
            Ok(Acceptance::Accepted)
        } else {
            Ok(Acceptance::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[tokio::test]
    async fn word_list_accepts_known_words_in_any_case() {
        let validator = WordListValidator::new(words_from_slice(&["crane", "SLATE"]));
        assert_eq!(validator.len(), 2);

        let crane = Word::new("CRANE").unwrap();
        let slate = Word::new("slate").unwrap();
        assert_eq!(validator.check(&crane).await.unwrap(), Acceptance::Accepted);
        assert_eq!(validator.check(&slate).await.unwrap(), Acceptance::Accepted);
    }

    #[tokio::test]
    async fn word_list_rejects_unknown_words() {
        let validator = WordListValidator::new(words_from_slice(&["crane"]));
        let xyzzy = Word::new("xyzzy").unwrap();
        assert_eq!(validator.check(&xyzzy).await.unwrap(), Acceptance::Rejected);
    }

    #[test]
    fn dictionary_endpoint_is_normalized() {
        let validator = DictionaryApiValidator::new(Client::new(), "https://example.test/api/");
        assert_eq!(validator.endpoint, "https://example.test/api");
    }
}
