//! Builder for constructing machines.

use crate::builder::error::ConfigError;
use crate::builder::validation::{self, Check};
use crate::core::{Letter, Plugboard, Reflector, Rotor, RotorId};
use crate::machine::{Machine, ROTOR_COUNT};
use tracing::{debug, warn};

/// Builder for constructing machines with a fluent API.
///
/// Rotors are required; positions and ring settings default to `A`
/// (zero) and the plugboard defaults to empty.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    rotors: Option<Vec<usize>>,
    positions: Option<Vec<i32>>,
    ring_settings: Option<Vec<i32>>,
    plug_pairs: Vec<(char, char)>,
    record_history: bool,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rotor order, left to right, as catalog indices (required).
    pub fn rotors(mut self, ids: &[usize]) -> Self {
        self.rotors = Some(ids.to_vec());
        self
    }

    /// Set the rotor order, left to right, by identity.
    pub fn rotor_ids(self, ids: [RotorId; ROTOR_COUNT]) -> Self {
        self.rotors(&ids.map(RotorId::index))
    }

    /// Set the starting window positions, left to right.
    pub fn positions(mut self, positions: &[i32]) -> Self {
        self.positions = Some(positions.to_vec());
        self
    }

    /// Set the ring settings, left to right.
    pub fn ring_settings(mut self, ring_settings: &[i32]) -> Self {
        self.ring_settings = Some(ring_settings.to_vec());
        self
    }

    /// Add one plugboard cable.
    pub fn plug(mut self, a: char, b: char) -> Self {
        self.plug_pairs.push((a, b));
        self
    }

    /// Add several plugboard cables.
    pub fn plugboard_pairs(mut self, pairs: &[(char, char)]) -> Self {
        self.plug_pairs.extend_from_slice(pairs);
        self
    }

    /// Record a [`StepHistory`](crate::core::StepHistory) while processing.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the machine.
    ///
    /// Every field is validated first; if anything is wrong, all problems
    /// are reported together and no machine is created.
    pub fn build(self) -> Result<Machine, ConfigError> {
        let rotor_ids = self.rotors.unwrap_or_default();
        let positions = self.positions.unwrap_or_else(|| vec![0; ROTOR_COUNT]);
        let ring_settings = self.ring_settings.unwrap_or_else(|| vec![0; ROTOR_COUNT]);
        let plugboard = Plugboard::new(&self.plug_pairs);

        let mut checks = Vec::new();
        checks.extend(rotor_checks(&rotor_ids));
        checks.extend(setting_checks(
            &positions,
            |found| ConfigError::WrongPositionCount {
                expected: ROTOR_COUNT,
                found,
            },
            |slot, value| ConfigError::PositionOutOfRange { slot, value },
        ));
        checks.extend(setting_checks(
            &ring_settings,
            |found| ConfigError::WrongRingCount {
                expected: ROTOR_COUNT,
                found,
            },
            |slot, value| ConfigError::RingSettingOutOfRange { slot, value },
        ));
        checks.extend(validation::from_result(&plugboard));

        if let Err(err) = validation::collect(checks) {
            warn!(error = %err, "rejected machine configuration");
            return Err(err);
        }

        let rotors = rotor_ids
            .iter()
            .zip(&ring_settings)
            .zip(&positions)
            .enumerate()
            .map(|(slot, ((&index, &ring), &position))| install(slot, index, ring, position))
            .collect::<Result<Vec<_>, _>>()?;
        let found = rotors.len();
        let rotors: [Rotor; ROTOR_COUNT] =
            rotors.try_into().map_err(|_| ConfigError::WrongRotorCount {
                expected: ROTOR_COUNT,
                found,
            })?;

        let machine = Machine::assemble(rotors, Reflector::b()?, plugboard?, self.record_history);

        debug!(
            rotors = %machine.rotor_order(),
            positions = %machine.positions(),
            plugs = machine.plugboard().len(),
            "built machine"
        );

        Ok(machine)
    }
}

fn rotor_checks(ids: &[usize]) -> Vec<Check> {
    let mut checks = vec![validation::check(ids.len() == ROTOR_COUNT, || {
        ConfigError::WrongRotorCount {
            expected: ROTOR_COUNT,
            found: ids.len(),
        }
    })];

    for (slot, &index) in ids.iter().enumerate() {
        checks.push(validation::check(
            RotorId::from_index(index).is_some(),
            || ConfigError::UnknownRotor {
                slot,
                index,
                catalog: RotorId::ALL.len(),
            },
        ));
    }

    checks
}

fn setting_checks<C, R>(values: &[i32], wrong_count: C, out_of_range: R) -> Vec<Check>
where
    C: FnOnce(usize) -> ConfigError,
    R: Fn(usize, i32) -> ConfigError,
{
    let mut checks = vec![validation::check(values.len() == ROTOR_COUNT, || {
        wrong_count(values.len())
    })];

    for (slot, &value) in values.iter().enumerate() {
        checks.push(validation::check(to_letter(value).is_some(), || {
            out_of_range(slot, value)
        }));
    }

    checks
}

fn install(slot: usize, index: usize, ring: i32, position: i32) -> Result<Rotor, ConfigError> {
    let id = RotorId::from_index(index).ok_or(ConfigError::UnknownRotor {
        slot,
        index,
        catalog: RotorId::ALL.len(),
    })?;
    let ring = to_letter(ring).ok_or(ConfigError::RingSettingOutOfRange { slot, value: ring })?;
    let position = to_letter(position).ok_or(ConfigError::PositionOutOfRange {
        slot,
        value: position,
    })?;
    Rotor::new(id, ring, position)
}

fn to_letter(value: i32) -> Option<Letter> {
    u8::try_from(value).ok().and_then(Letter::from_index)
}
