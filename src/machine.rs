//! The three-rotor machine that drives stepping and the signal path.

use crate::builder::{ConfigError, MachineBuilder};
use crate::core::{
    Letter, Plugboard, Reflector, Rotor, RotorId, RotorPositions, StepHistory, StepKind,
    StepRecord,
};
use std::fmt;
use tracing::trace;

/// Number of rotors in every machine.
pub const ROTOR_COUNT: usize = 3;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// A configured cipher machine.
///
/// The machine is its own inverse: two machines built from the same
/// settings turn plaintext into ciphertext and that ciphertext back into
/// the plaintext.
///
/// # Example
///
/// ```rust
/// use rotorcipher::Machine;
///
/// let mut encoder = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B')]).unwrap();
/// let ciphertext = encoder.process("Hello, world");
///
/// let mut decoder = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[('A', 'B')]).unwrap();
/// assert_eq!(decoder.process(&ciphertext), "HELLO, WORLD");
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
    initial: RotorPositions,
    keystrokes: usize,
    history: Option<StepHistory>,
}

impl Machine {
    /// Build a machine from catalog rotor indices, starting positions,
    /// ring settings and plugboard pairs, all given left to right.
    pub fn new(
        rotor_ids: &[usize],
        positions: &[i32],
        ring_settings: &[i32],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, ConfigError> {
        MachineBuilder::new()
            .rotors(rotor_ids)
            .positions(positions)
            .ring_settings(ring_settings)
            .plugboard_pairs(plugboard_pairs)
            .build()
    }

    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    pub(crate) fn assemble(
        rotors: [Rotor; ROTOR_COUNT],
        reflector: Reflector,
        plugboard: Plugboard,
        record_history: bool,
    ) -> Self {
        let initial = RotorPositions(rotors.each_ref().map(Rotor::position));
        Self {
            rotors,
            reflector,
            plugboard,
            initial,
            keystrokes: 0,
            history: record_history.then(StepHistory::new),
        }
    }

    /// Current rotor windows (pure)
    pub fn positions(&self) -> RotorPositions {
        RotorPositions(self.rotors.each_ref().map(Rotor::position))
    }

    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    pub fn rotor_order(&self) -> RotorOrder {
        RotorOrder(self.rotors.each_ref().map(Rotor::id))
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Step history, if the machine was built with history recording.
    pub fn history(&self) -> Option<&StepHistory> {
        self.history.as_ref()
    }

    /// Number of letters enciphered since construction or the last reset.
    pub fn keystrokes(&self) -> usize {
        self.keystrokes
    }

    /// Return the rotors to their starting positions and clear the history.
    pub fn reset(&mut self) {
        for (rotor, position) in self.rotors.iter_mut().zip(self.initial.0) {
            rotor.set_position(position);
        }
        self.keystrokes = 0;
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }

    /// Advance the rotors for one keystroke.
    ///
    /// The middle rotor's notch is checked first: when it is at its notch
    /// both it and the left rotor move. Otherwise the right rotor's notch
    /// carries into the middle rotor. The right rotor always moves. Since
    /// the middle rotor is stepped by its own notch, it moves on two
    /// consecutive keystrokes (the double step).
    pub fn step(&mut self) -> StepKind {
        let kind = if self.rotors[MIDDLE].at_notch() {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
            StepKind::DoubleStep
        } else if self.rotors[RIGHT].at_notch() {
            self.rotors[MIDDLE].step();
            StepKind::Carry
        } else {
            StepKind::Single
        };
        self.rotors[RIGHT].step();

        if kind == StepKind::DoubleStep {
            trace!(positions = %self.positions(), "middle rotor double-stepped");
        }
        kind
    }

    /// Encipher one letter: step, then plugboard, rotors right to left,
    /// reflector, rotors left to right, plugboard.
    pub fn encipher(&mut self, c: Letter) -> Letter {
        let from = self.positions();
        let kind = self.step();
        let to = self.positions();
        self.keystrokes += 1;

        if let Some(history) = self.history.as_mut() {
            history.push(StepRecord {
                keystroke: self.keystrokes,
                from,
                to,
                kind,
            });
        }

        let c = self.plugboard.swap(c);
        let c = self.rotors.iter().rev().fold(c, |c, rotor| rotor.forward(c));
        let c = self.reflector.reflect(c);
        let c = self.rotors.iter().fold(c, |c, rotor| rotor.backward(c));
        self.plugboard.swap(c)
    }

    /// Encipher one character.
    ///
    /// Characters outside `A`-`Z` are returned unchanged and do not move
    /// the rotors. Callers are expected to upper-case first.
    pub fn encipher_char(&mut self, c: char) -> char {
        match Letter::from_char(c) {
            Some(letter) => self.encipher(letter).to_char(),
            None => c,
        }
    }

    /// Upper-case `text` and encipher it character by character.
    ///
    /// Case folding is ASCII-only, so the output always has exactly as
    /// many characters as the input.
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|c| self.encipher_char(c.to_ascii_uppercase()))
            .collect()
    }
}

/// Rotor identities left to right, displayed as `I-II-III`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotorOrder(pub [RotorId; ROTOR_COUNT]);

impl fmt::Display for RotorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, middle, right] = self.0;
        write!(f, "{left}-{middle}-{right}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(positions: [i32; 3]) -> Machine {
        Machine::new(&[0, 1, 2], &positions, &[0, 0, 0], &[]).unwrap()
    }

    #[test]
    fn right_rotor_steps_every_keystroke() {
        let mut m = machine([0, 0, 0]);
        assert_eq!(m.step(), StepKind::Single);
        assert_eq!(m.positions().indices(), [0, 0, 1]);
    }

    #[test]
    fn right_notch_carries_into_middle() {
        // Rotor III notches at V.
        let mut m = machine([0, 0, 21]);
        assert_eq!(m.step(), StepKind::Carry);
        assert_eq!(m.positions().indices(), [0, 1, 22]);
    }

    #[test]
    fn middle_rotor_double_steps() {
        let mut m = machine([0, 3, 20]);
        let kinds: Vec<_> = (0..4).map(|_| m.step()).collect();

        assert_eq!(
            kinds,
            vec![
                StepKind::Single,
                StepKind::Carry,
                StepKind::DoubleStep,
                StepKind::Single
            ]
        );
        assert_eq!(m.positions().indices(), [1, 5, 24]);
    }

    #[test]
    fn middle_advances_once_per_right_revolution() {
        let mut m = machine([0, 0, 0]);
        for _ in 0..26 {
            m.step();
        }
        assert_eq!(m.positions().indices(), [0, 1, 0]);
    }

    #[test]
    fn passthrough_does_not_step() {
        let mut m = machine([0, 0, 0]);
        assert_eq!(m.process(" ,.!123"), " ,.!123");
        assert_eq!(m.positions().indices(), [0, 0, 0]);
        assert_eq!(m.keystrokes(), 0);
    }

    #[test]
    fn non_ascii_passes_through_unchanged() {
        let mut m = machine([0, 0, 0]);
        let output = m.process("straße");
        assert_eq!(output.chars().count(), 6);
        assert_eq!(output.chars().nth(4), Some('ß'));
    }

    #[test]
    fn no_letter_enciphers_to_itself() {
        let mut m = machine([0, 0, 0]);
        for _ in 0..200 {
            for c in Letter::all() {
                let mut probe = m.clone();
                assert_ne!(probe.encipher(c), c);
            }
            m.step();
        }
    }

    #[test]
    fn reset_restores_start_positions() {
        let mut m = machine([4, 5, 6]);
        let first = m.process("ATTACK AT DAWN");
        assert_ne!(m.positions().indices(), [4, 5, 6]);

        m.reset();
        assert_eq!(m.positions().indices(), [4, 5, 6]);
        assert_eq!(m.keystrokes(), 0);
        assert_eq!(m.process("ATTACK AT DAWN"), first);
    }

    #[test]
    fn history_is_recorded_when_enabled() {
        let mut m = Machine::builder()
            .rotors(&[0, 1, 2])
            .positions(&[0, 3, 20])
            .record_history(true)
            .build()
            .unwrap();
        m.process("ABC D");

        let history = m.history().unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.double_steps().count(), 1);
        assert_eq!(history.steps()[2].keystroke, 3);
        assert_eq!(history.steps()[2].to.indices(), [1, 5, 23]);
    }

    #[test]
    fn history_is_off_by_default() {
        let mut m = machine([0, 0, 0]);
        m.process("HELLO");
        assert!(m.history().is_none());
    }

    #[test]
    fn rotor_order_displays_roman_numerals() {
        let m = Machine::new(&[2, 0, 1], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
        assert_eq!(m.rotor_order().to_string(), "III-I-II");
    }
}
