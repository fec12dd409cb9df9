//! Score command
//!
//! Evaluates a single guess against a secret word.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result, bail};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    if guess.len() != secret.len() {
        bail!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let feedback = Feedback::evaluate(&guess, &secret);
    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    #[test]
    fn scores_duplicate_letters() {
        let result = score_guess("paper", "APPLE").unwrap();
        assert_eq!(result.guess.text(), "PAPER");
        assert_eq!(result.secret.text(), "APPLE");
        assert_eq!(
            result.feedback.verdicts(),
            &[Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = score_guess("cat", "apple").unwrap_err();
        assert!(err.to_string().contains("3 letters"));
    }

    #[test]
    fn rejects_overlong_words() {
        let long = "a".repeat(256);
        let err = score_guess(&long, &long).unwrap_err();
        assert!(format!("{err:#}").contains("at most 12 letters"));
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(score_guess("cr4ne", "apple").is_err());
        assert!(score_guess("crane", "").is_err());
    }
}
