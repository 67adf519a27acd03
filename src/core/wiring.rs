//! Parsing of 26-letter wiring strings into lookup tables.

use super::letter::{Letter, ALPHABET_LEN};
use crate::builder::ConfigError;

/// A permutation of the alphabet and its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Permutation {
    pub(crate) forward: [Letter; ALPHABET_LEN as usize],
    pub(crate) inverse: [Letter; ALPHABET_LEN as usize],
}

impl Permutation {
    /// Parse `wiring`, where the character at index `i` is the image of `i`.
    ///
    /// Fails unless `wiring` is exactly 26 upper-case letters with no repeats.
    pub(crate) fn parse(wiring: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidWiring {
            wiring: wiring.to_string(),
            reason: reason.to_string(),
        };

        let letters = wiring
            .chars()
            .map(Letter::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid("contains a non-alphabetic character"))?;

        if letters.len() != ALPHABET_LEN as usize {
            return Err(invalid("must contain exactly 26 letters"));
        }

        let mut forward = [Letter::A; ALPHABET_LEN as usize];
        let mut inverse = [None; ALPHABET_LEN as usize];
        for (input, output) in Letter::all().zip(letters) {
            let slot = &mut inverse[output.index() as usize];
            if slot.is_some() {
                return Err(invalid("maps two inputs to the same letter"));
            }
            *slot = Some(input);
            forward[input.index() as usize] = output;
        }

        // 26 distinct outputs over 26 slots fill every slot.
        let inverse = inverse.map(|slot| slot.unwrap_or(Letter::A));
        Ok(Self { forward, inverse })
    }

    pub(crate) fn map(&self, letter: Letter) -> Letter {
        self.forward[letter.index() as usize]
    }

    pub(crate) fn unmap(&self, letter: Letter) -> Letter {
        self.inverse[letter.index() as usize]
    }
}
