//! Secret word providers
//!
//! A session needs exactly one secret word. The remote provider asks a random
//! word API; when it fails the [`FallbackVocabulary`] picks a word locally, so
//! starting a game never fails for network reasons.

use crate::core::{Word, WordError};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use reqwest::{Client, StatusCode};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for word providers
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Word request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Word service returned {0}")]
    Status(StatusCode),
    #[error("Word service returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Word service returned no words")]
    EmptyResponse,
    #[error("Word service returned an unusable word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("No fallback words of length {length}")]
    NoWords { length: usize },
}

/// Something that can supply a secret word
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetch one uppercase word with exactly `length` letters
    async fn fetch_secret_word(&self, length: usize) -> Result<Word, ProviderError>;
}

/// Random word API client
///
/// Sends `GET <endpoint>?length=N` and expects a JSON array of strings.
pub struct RemoteWordProvider {
    http: Client,
    endpoint: String,
}

impl RemoteWordProvider {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl WordProvider for RemoteWordProvider {
    async fn fetch_secret_word(&self, length: usize) -> Result<Word, ProviderError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("length", length)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        let word = parse_word_response(&body, length)?;
        debug!(endpoint = %self.endpoint, "fetched remote secret word");
        Ok(word)
    }
}

/// Take the first word of a JSON array response such as `["apple"]`
fn parse_word_response(body: &str, length: usize) -> Result<Word, ProviderError> {
    let words: Vec<String> = serde_json::from_str(body)?;
    let first = words.first().ok_or(ProviderError::EmptyResponse)?;
    Ok(Word::with_length(first, length)?)
}

/// Local vocabulary with a seeded, reproducible selection order
///
/// The same seed always yields the same sequence of words.
pub struct FallbackVocabulary {
    words: Vec<Word>,
    rng: Mutex<StdRng>,
}

impl FallbackVocabulary {
    pub fn new(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seed from the current day, so the first fallback word is a word of the day
    pub fn daily(words: Vec<Word>) -> Self {
        Self::new(words, day_number())
    }

    /// Pick the next word of the given length
    pub fn choose(&self, length: usize) -> Option<Word> {
        let candidates: Vec<&Word> = self.words.iter().filter(|w| w.len() == length).collect();
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        candidates.choose(&mut *rng).map(|&w| w.clone())
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
impl WordProvider for FallbackVocabulary {
    async fn fetch_secret_word(&self, length: usize) -> Result<Word, ProviderError> {
        self.choose(length).ok_or(ProviderError::NoWords { length })
    }
}

/// Days since the Unix epoch
fn day_number() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() / 86_400)
}

/// Secret word source used by the game: an optional primary provider backed by
/// the local fallback vocabulary
pub struct SecretWordSource {
    primary: Option<Arc<dyn WordProvider>>,
    fallback: FallbackVocabulary,
}

impl SecretWordSource {
    pub fn new(primary: Option<Arc<dyn WordProvider>>, fallback: FallbackVocabulary) -> Self {
        Self { primary, fallback }
    }

    /// Use only the local vocabulary
    pub fn offline(fallback: FallbackVocabulary) -> Self {
        Self::new(None, fallback)
    }

    /// Get a secret word, falling back to the local vocabulary on any error
    ///
    /// # Errors
    /// Returns `ProviderError::NoWords` only when the primary provider failed
    /// (or is absent) and the fallback has no word of this length.
    pub async fn secret_word(&self, length: usize) -> Result<Word, ProviderError> {
        if let Some(primary) = &self.primary {
            match primary.fetch_secret_word(length).await {
                Ok(word) => return Ok(word),
                Err(err) => warn!(%err, "word provider unavailable, using fallback vocabulary"),
            }
        }
        self.fallback.fetch_secret_word(length).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    struct FailingProvider;

    #[async_trait]
    impl WordProvider for FailingProvider {
        async fn fetch_secret_word(&self, _length: usize) -> Result<Word, ProviderError> {
            Err(ProviderError::EmptyResponse)
        }
    }

    struct FixedProvider(&'static str);

    #[async_trait]
    impl WordProvider for FixedProvider {
        async fn fetch_secret_word(&self, length: usize) -> Result<Word, ProviderError> {
            Ok(Word::with_length(self.0, length)?)
        }
    }

    fn vocabulary(seed: u64) -> FallbackVocabulary {
        FallbackVocabulary::new(words_from_slice(&["crane", "slate", "apple", "cat"]), seed)
    }

    #[test]
    fn parses_first_word_of_response() {
        let word = parse_word_response(r#"["plumb", "crane"]"#, 5).unwrap();
        assert_eq!(word.text(), "PLUMB");
    }

    #[test]
    fn rejects_bad_responses() {
        assert!(matches!(
            parse_word_response("[]", 5),
            Err(ProviderError::EmptyResponse)
        ));
        assert!(matches!(
            parse_word_response("<html>", 5),
            Err(ProviderError::Malformed(_))
        ));
        assert!(matches!(
            parse_word_response(r#"["cat"]"#, 5),
            Err(ProviderError::InvalidWord(_))
        ));
        assert!(matches!(
            parse_word_response(r#"["don't"]"#, 5),
            Err(ProviderError::InvalidWord(_))
        ));
    }

    #[test]
    fn fallback_is_deterministic_for_a_seed() {
        let a = vocabulary(7);
        let b = vocabulary(7);
        let picks_a: Vec<_> = (0..10).map(|_| a.choose(5).unwrap()).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.choose(5).unwrap()).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn fallback_respects_length() {
        let v = vocabulary(1);
        for _ in 0..10 {
            assert_eq!(v.choose(5).unwrap().len(), 5);
        }
        assert_eq!(v.choose(3).unwrap().text(), "CAT");
        assert_eq!(v.choose(7), None);
    }

    #[tokio::test]
    async fn source_prefers_primary() {
        let source = SecretWordSource::new(Some(Arc::new(FixedProvider("robot"))), vocabulary(1));
        assert_eq!(source.secret_word(5).await.unwrap().text(), "ROBOT");
    }

    #[tokio::test]
    async fn source_falls_back_on_provider_error() {
        let source = SecretWordSource::new(Some(Arc::new(FailingProvider)), vocabulary(1));
        let word = source.secret_word(5).await.unwrap();
        assert!(["CRANE", "SLATE", "APPLE"].contains(&word.text()));
    }

    #[tokio::test]
    async fn source_falls_back_on_wrong_length_from_primary() {
        let source = SecretWordSource::new(Some(Arc::new(FixedProvider("cat"))), vocabulary(1));
        assert_eq!(source.secret_word(5).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn offline_source_without_matching_words_errors() {
        let source = SecretWordSource::offline(vocabulary(1));
        assert!(matches!(
            source.secret_word(9).await,
            Err(ProviderError::NoWords { length: 9 })
        ));
    }
}
