//! Rotors: wired permutations that turn one position per keystroke.
//!
//! Each rotor carries a fixed ring setting and a mutable position. The
//! forward pass models the signal entering from the keyboard side, the
//! backward pass the signal returning from the reflector. At any fixed
//! position the two passes are mutual inverses.

use super::letter::Letter;
use super::wiring::Permutation;
use crate::builder::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static wiring record for a catalog rotor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    pub notch: char,
}

pub const ROTOR_I: RotorSpec = RotorSpec {
    name: "I",
    wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    notch: 'Q',
};

pub const ROTOR_II: RotorSpec = RotorSpec {
    name: "II",
    wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
    notch: 'E',
};

pub const ROTOR_III: RotorSpec = RotorSpec {
    name: "III",
    wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
    notch: 'V',
};

/// Identity of a rotor in the fixed catalog.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::RotorId;
///
/// assert_eq!(RotorId::from_index(1), Some(RotorId::II));
/// assert_eq!(RotorId::II.spec().notch, 'E');
/// assert!(RotorId::from_index(3).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    I,
    II,
    III,
}

impl RotorId {
    pub const ALL: [RotorId; 3] = [RotorId::I, RotorId::II, RotorId::III];

    /// Look up a rotor by its zero-based catalog index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Self::I => 0,
            Self::II => 1,
            Self::III => 2,
        }
    }

    pub fn spec(self) -> &'static RotorSpec {
        match self {
            Self::I => &ROTOR_I,
            Self::II => &ROTOR_II,
            Self::III => &ROTOR_III,
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// A rotor installed in a machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    wiring: Permutation,
    notch: Letter,
    ring_setting: Letter,
    position: Letter,
}

impl Rotor {
    /// Install catalog rotor `id` with the given ring setting and start position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rotorcipher::core::{Letter, Rotor, RotorId};
    ///
    /// let mut rotor = Rotor::new(RotorId::III, Letter::A, Letter::A).unwrap();
    /// let c = Letter::from_char('H').unwrap();
    /// assert_eq!(rotor.backward(rotor.forward(c)), c);
    ///
    /// rotor.step();
    /// assert_eq!(rotor.position().to_char(), 'B');
    /// ```
    pub fn new(id: RotorId, ring_setting: Letter, position: Letter) -> Result<Self, ConfigError> {
        let spec = id.spec();
        let wiring = Permutation::parse(spec.wiring)?;
        let notch = Letter::from_char(spec.notch).ok_or_else(|| ConfigError::InvalidWiring {
            wiring: spec.wiring.to_string(),
            reason: format!("notch {:?} is not a letter", spec.notch),
        })?;

        Ok(Self {
            id,
            wiring,
            notch,
            ring_setting,
            position,
        })
    }

    pub fn id(&self) -> RotorId {
        self.id
    }

    pub fn position(&self) -> Letter {
        self.position
    }

    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    pub fn notch(&self) -> Letter {
        self.notch
    }

    pub(crate) fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Advance one position, wrapping from `Z` to `A`.
    pub fn step(&mut self) {
        self.position = self.position.shift(1);
    }

    /// True when the rotor window shows its notch letter.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Signal path from the keyboard side towards the reflector.
    pub fn forward(&self, c: Letter) -> Letter {
        self.wiring.map(c.shift(self.offset()))
    }

    /// Signal path from the reflector back towards the keyboard.
    pub fn backward(&self, c: Letter) -> Letter {
        self.wiring.unmap(c).shift(-self.offset())
    }

    fn offset(&self) -> i32 {
        i32::from(self.position.index()) - i32::from(self.ring_setting.index())
    }
}
