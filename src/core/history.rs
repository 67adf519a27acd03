//! Step history tracking.
//!
//! Records how the rotor windows changed on each keystroke, which makes the
//! carry and double-step behavior observable.

use super::state::{RotorPositions, StepKind};
use serde::{Deserialize, Serialize};

/// Record of a single keystroke's rotor movement.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::{RotorPositions, StepKind, StepRecord};
///
/// let record = StepRecord {
///     keystroke: 1,
///     from: RotorPositions::from_indices([0, 0, 0]).unwrap(),
///     to: RotorPositions::from_indices([0, 0, 1]).unwrap(),
///     kind: StepKind::Single,
/// };
/// assert_eq!(record.to.to_string(), "AAB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// One-based count of enciphered letters, including this one
    pub keystroke: usize,
    /// Windows before stepping
    pub from: RotorPositions,
    /// Windows after stepping
    pub to: RotorPositions,
    /// Which rotors moved
    pub kind: StepKind,
}

/// Ordered history of rotor steps.
///
/// # Example
///
/// ```rust
/// use rotorcipher::core::{RotorPositions, StepHistory, StepKind, StepRecord};
///
/// let aaa = RotorPositions::from_indices([0, 0, 0]).unwrap();
/// let aab = RotorPositions::from_indices([0, 0, 1]).unwrap();
///
/// let history = StepHistory::new().record(StepRecord {
///     keystroke: 1,
///     from: aaa,
///     to: aab,
///     kind: StepKind::Single,
/// });
///
/// assert_eq!(history.get_path(), vec![&aaa, &aab]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepHistory {
    steps: Vec<StepRecord>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history and leaving `self` untouched.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    pub(crate) fn push(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    /// Window states traversed: the starting windows, then the windows
    /// after each step.
    pub fn get_path(&self) -> Vec<&RotorPositions> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Steps on which the middle rotor double-stepped.
    pub fn double_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|step| step.kind == StepKind::DoubleStep)
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
