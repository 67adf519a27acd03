//! Rotor window state of a three-rotor machine.
//!
//! The three positions fully describe where the machine is in its cycle,
//! giving 26³ distinct states.

use super::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positions of the left, middle and right rotors, as read in the windows.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::RotorPositions;
///
/// let positions = RotorPositions::from_indices([0, 3, 20]).unwrap();
/// assert_eq!(positions.to_string(), "ADU");
/// assert_eq!(positions.right().to_char(), 'U');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct RotorPositions(pub [Letter; 3]);

impl RotorPositions {
    /// Build from numeric positions, `None` if any is outside `0..26`.
    pub fn from_indices(indices: [u8; 3]) -> Option<Self> {
        let [l, m, r] = indices;
        Some(Self([
            Letter::from_index(l)?,
            Letter::from_index(m)?,
            Letter::from_index(r)?,
        ]))
    }

    pub fn indices(&self) -> [u8; 3] {
        self.0.map(Letter::index)
    }

    pub fn left(&self) -> Letter {
        self.0[0]
    }

    pub fn middle(&self) -> Letter {
        self.0[1]
    }

    pub fn right(&self) -> Letter {
        self.0[2]
    }
}

impl fmt::Display for RotorPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Which rotors moved on a keystroke.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepKind {
    /// Only the right rotor moved.
    Single,
    /// The right rotor was at its notch and carried into the middle rotor.
    Carry,
    /// The middle rotor was at its notch and moved together with the left rotor.
    DoubleStep,
}

impl StepKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Single => "Single",
            Self::Carry => "Carry",
            Self::DoubleStep => "DoubleStep",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_indices_rejects_out_of_range() {
        assert!(RotorPositions::from_indices([0, 25, 12]).is_some());
        assert!(RotorPositions::from_indices([0, 26, 12]).is_none());
    }

    #[test]
    fn indices_round_trip() {
        let positions = RotorPositions::from_indices([7, 0, 25]).unwrap();
        assert_eq!(positions.indices(), [7, 0, 25]);
        assert_eq!(positions.to_string(), "HAZ");
    }

    #[test]
    fn default_is_all_a() {
        assert_eq!(RotorPositions::default().to_string(), "AAA");
    }

    #[test]
    fn positions_serialize_as_indices() {
        let positions = RotorPositions::from_indices([1, 2, 3]).unwrap();
        let json = serde_json::to_string(&positions).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: RotorPositions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, positions);
    }

    #[test]
    fn step_kind_names() {
        assert_eq!(StepKind::Single.name(), "Single");
        assert_eq!(StepKind::Carry.name(), "Carry");
        assert_eq!(StepKind::DoubleStep.name(), "DoubleStep");
    }
}
