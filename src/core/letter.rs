//! The 26-symbol alphabet every machine component works on.
//!
//! A [`Letter`] is an index in `0..26`. All position arithmetic goes through
//! [`Letter::shift`], which wraps with true modulo so negative offsets land
//! back inside the alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// The alphabet in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single alphabet symbol, stored as its index.
///
/// Construction is checked, so a `Letter` is always in `0..26`.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::Letter;
///
/// let a = Letter::from_char('A').unwrap();
/// assert_eq!(a.index(), 0);
/// assert_eq!(a.shift(-1).to_char(), 'Z');
/// assert!(Letter::from_char('a').is_none());
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Letter(u8);

impl Letter {
    /// `A`, the zero position.
    pub const A: Letter = Letter(0);

    /// Build a letter from an index, `None` outside `0..26`.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < ALPHABET_LEN).then_some(Letter(index))
    }

    /// Build a letter from an upper-case ASCII character.
    ///
    /// Lower-case and non-alphabetic characters are not letters; callers
    /// upper-case first when they want case folding.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Letter(c as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Offset this letter by `by` positions, wrapping modulo 26.
    pub fn shift(self, by: i32) -> Self {
        let wrapped = (i32::from(self.0) + by).rem_euclid(i32::from(ALPHABET_LEN));
        Letter(wrapped as u8)
    }

    /// Iterate the alphabet from `A` to `Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).map(Letter)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> u8 {
        letter.0
    }
}

impl TryFrom<u8> for Letter {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Letter::from_index(index).ok_or_else(|| format!("letter index {index} is outside 0..26"))
    }
}
