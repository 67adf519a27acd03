//! The static reflector that turns the rotor pass into a round trip.

use super::letter::Letter;
use super::wiring::Permutation;
use crate::builder::ConfigError;

/// Wiring of the built-in reflector (B).
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// A self-inverse permutation with no fixed points.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::{Letter, Reflector};
///
/// let reflector = Reflector::b().unwrap();
/// let a = Letter::from_char('A').unwrap();
/// assert_eq!(reflector.reflect(a).to_char(), 'Y');
/// assert_eq!(reflector.reflect(reflector.reflect(a)), a);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Build a reflector from a wiring string.
    ///
    /// The wiring must be a permutation that pairs every letter with a
    /// different letter.
    pub fn from_wiring(wiring: &str) -> Result<Self, ConfigError> {
        let permutation = Permutation::parse(wiring)?;
        if let Some(letter) = Letter::all().find(|&c| {
            let image = permutation.map(c);
            image == c || permutation.map(image) != c
        }) {
            return Err(ConfigError::ReflectorNotInvolutive {
                letter: letter.to_char(),
            });
        }
        Ok(Self {
            wiring: permutation,
        })
    }

    /// The built-in reflector B.
    pub fn b() -> Result<Self, ConfigError> {
        Self::from_wiring(REFLECTOR_B)
    }

    pub fn reflect(&self, c: Letter) -> Letter {
        self.wiring.map(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_reflector_is_valid() {
        assert!(Reflector::from_wiring(REFLECTOR_B).is_ok());
    }

    #[test]
    fn reflect_is_self_inverse_without_fixed_points() {
        let reflector = Reflector::b().unwrap();
        for c in Letter::all() {
            let image = reflector.reflect(c);
            assert_ne!(image, c);
            assert_eq!(reflector.reflect(image), c);
        }
    }

    #[test]
    fn rotor_wiring_is_not_a_reflector() {
        let result = Reflector::from_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        assert!(matches!(
            result,
            Err(ConfigError::ReflectorNotInvolutive { .. })
        ));
    }

    #[test]
    fn identity_is_not_a_reflector() {
        let result = Reflector::from_wiring("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(
            result,
            Err(ConfigError::ReflectorNotInvolutive { letter: 'A' })
        ));
    }
}
