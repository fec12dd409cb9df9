//! Keyboard mark aggregation
//!
//! The on-screen keyboard shows, for every letter, the best verdict it has
//! received in any evaluated row. Marks only ever move upwards:
//! Absent → Present → Correct, and Correct is final.

use super::{GuessRow, Letter, Verdict};

/// Best-known verdict per letter across a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardMarks {
    marks: [Option<Verdict>; Letter::COUNT],
}

impl KeyboardMarks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mark for a letter, `None` if it has not been guessed yet
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> Option<Verdict> {
        self.marks[letter.index()]
    }

    /// Upgrade a single letter's mark
    ///
    /// Returns the new mark if it changed. A weaker verdict never replaces a
    /// stronger one.
    pub fn upgrade(&mut self, letter: Letter, verdict: Verdict) -> Option<Verdict> {
        let slot = &mut self.marks[letter.index()];
        match *slot {
            Some(current) if current >= verdict => None,
            _ => {
                *slot = Some(verdict);
                Some(verdict)
            }
        }
    }

    /// Fold one evaluated row into the marks
    ///
    /// The row is reduced to the best verdict per letter before anything is
    /// applied, so a duplicate letter marked Absent never hides its Correct
    /// twin in the same row. Returns the changed marks in the order the letters
    /// first appear in the row.
    pub fn apply_row(&mut self, row: &GuessRow) -> Vec<(Letter, Verdict)> {
        let mut best: Vec<(Letter, Verdict)> = Vec::with_capacity(row.guess().len());
        for (letter, verdict) in row.tiles() {
            match best.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, current)) => *current = (*current).max(verdict),
                None => best.push((letter, verdict)),
            }
        }

        best.into_iter()
            .filter_map(|(letter, verdict)| {
                self.upgrade(letter, verdict).map(|updated| (letter, updated))
            })
            .collect()
    }

    /// Iterate over every letter with its mark
    pub fn iter(&self) -> impl Iterator<Item = (Letter, Option<Verdict>)> + '_ {
        Letter::ALL.iter().map(|&letter| (letter, self.get(letter)))
    }
}
