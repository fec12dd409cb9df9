//! Win/loss statistics across sessions

/// Running totals for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[i]` counts wins in `i + 1` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: vec![0; max_guesses],
        }
    }

    /// Record a win that took `guesses` rows
    pub fn record_win(&mut self, guesses: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(slot) = guesses
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get_mut(i))
        {
            *slot += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // game counts are small
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let stats = Statistics::new(6);
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.guess_distribution, vec![0; 6]);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_extend_streak_and_distribution() {
        let mut stats = Statistics::new(6);
        stats.record_win(3);
        stats.record_win(1);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::new(6);
        stats.record_win(2);
        stats.record_win(2);
        stats.record_loss();
        stats.record_win(6);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_win_is_counted_but_not_distributed() {
        let mut stats = Statistics::new(3);
        stats.record_win(0);
        stats.record_win(4);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution, vec![0, 0, 0]);
    }
}
