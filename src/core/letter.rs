//! The finite letter alphabet used by words, tiles and the keyboard

use std::fmt;

/// One of the 26 uppercase letters `A..=Z`
///
/// Tiles, words and keyboard keys are all expressed in terms of this type, so
/// lookups are indexed by [`Letter::index`] instead of by character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// All letters in alphabetical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Convert a character to a letter, accepting either case
    ///
    /// Returns `None` for anything outside the ASCII alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Some(Letter::Q));
    /// assert_eq!(Letter::from_char('Q'), Some(Letter::Q));
    /// assert_eq!(Letter::from_char('3'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            let upper = ch.to_ascii_uppercase() as u8;
            Some(Self::ALL[(upper - b'A') as usize])
        } else {
            None
        }
    }

    /// Dense index in `0..26`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
