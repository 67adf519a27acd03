//! Plugboard: pairwise letter swaps at the keyboard boundary.

use super::letter::Letter;
use crate::builder::validation::{self, Check};
use crate::builder::ConfigError;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A partial, self-inverse letter swap.
///
/// Every letter appears in at most one pair; unpaired letters pass through.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::{Letter, Plugboard};
///
/// let plugboard: Plugboard = "AB CD".parse().unwrap();
/// let a = Letter::from_char('A').unwrap();
/// let e = Letter::from_char('E').unwrap();
///
/// assert_eq!(plugboard.swap(a).to_char(), 'B');
/// assert_eq!(plugboard.swap(e), e);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(Letter, Letter)>,
}

impl Plugboard {
    /// Build a plugboard from letter pairs.
    ///
    /// Letters are case-folded. Every violation in `pairs` is reported, not
    /// just the first one.
    pub fn new(pairs: &[(char, char)]) -> Result<Self, ConfigError> {
        let pairs: Vec<(char, char)> = pairs
            .iter()
            .map(|&(a, b)| (a.to_ascii_uppercase(), b.to_ascii_uppercase()))
            .collect();

        validation::collect(checks(&pairs))?;

        let pairs = pairs
            .into_iter()
            .map(|(a, b)| Ok::<_, ConfigError>((plug_letter(a)?, plug_letter(b)?)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { pairs })
    }

    /// Swap `c` with its partner, or return it unchanged.
    pub fn swap(&self, c: Letter) -> Letter {
        for &(a, b) in &self.pairs {
            if c == a {
                return b;
            }
            if c == b {
                return a;
            }
        }
        c
    }

    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

fn plug_letter(c: char) -> Result<Letter, ConfigError> {
    Letter::from_char(c).ok_or(ConfigError::InvalidPlugLetter { letter: c })
}

fn checks(pairs: &[(char, char)]) -> Vec<Check> {
    let mut checks = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for &(a, b) in pairs {
        for c in [a, b] {
            checks.push(validation::check(Letter::from_char(c).is_some(), || {
                ConfigError::InvalidPlugLetter { letter: c }
            }));
        }

        if a == b {
            checks.push(validation::reject(ConfigError::SelfPairedPlug { letter: a }));
            continue;
        }

        for c in [a, b] {
            if !seen.insert(c) && reported.insert(c) {
                checks.push(validation::reject(ConfigError::DuplicatePlugLetter { letter: c }));
            }
        }
    }

    checks
}

/// Parses whitespace-separated two-letter pairs such as `"AB CD"`.
impl FromStr for Plugboard {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pairs = s
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Ok((a, b)),
                    _ => Err(ConfigError::MalformedPlugPair {
                        token: token.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&pairs)
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{a}{b}")?;
        }
        Ok(())
    }
}
