//! Configuration errors for machine construction.

use thiserror::Error;

/// Errors that can occur when configuring a machine or its components.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Expected {expected} rotors, found {found}")]
    WrongRotorCount { expected: usize, found: usize },

    #[error("Unknown rotor {index} in slot {slot}; the catalog has {catalog} rotors")]
    UnknownRotor {
        slot: usize,
        index: usize,
        catalog: usize,
    },

    #[error("Expected {expected} rotor positions, found {found}")]
    WrongPositionCount { expected: usize, found: usize },

    #[error("Rotor position {value} in slot {slot} is outside 0..=25")]
    PositionOutOfRange { slot: usize, value: i32 },

    #[error("Expected {expected} ring settings, found {found}")]
    WrongRingCount { expected: usize, found: usize },

    #[error("Ring setting {value} in slot {slot} is outside 0..=25")]
    RingSettingOutOfRange { slot: usize, value: i32 },

    #[error("Plugboard letter {letter:?} is not in A-Z")]
    InvalidPlugLetter { letter: char },

    #[error("Plugboard letter {letter} is paired with itself")]
    SelfPairedPlug { letter: char },

    #[error("Plugboard letter {letter} is used in more than one pair")]
    DuplicatePlugLetter { letter: char },

    #[error("Plugboard pair {token:?} must be exactly two letters")]
    MalformedPlugPair { token: String },

    #[error("Invalid wiring {wiring:?}: {reason}")]
    InvalidWiring { wiring: String, reason: String },

    #[error("Reflector does not pair {letter} with a distinct partner")]
    ReflectorNotInvolutive { letter: char },

    #[error("Expected a whole number, found {token:?}")]
    MalformedNumber { token: String },

    #[error("{} configuration errors: {}", .0.len(), join(.0))]
    Multiple(Vec<ConfigError>),
}

impl ConfigError {
    /// Collapse a list of violations: one stays as itself, more become `Multiple`.
    pub fn from_violations(mut violations: Vec<ConfigError>) -> Self {
        if violations.len() == 1 {
            violations.remove(0)
        } else {
            ConfigError::Multiple(violations)
        }
    }

    /// Flatten into the individual violations.
    pub fn into_violations(self) -> Vec<ConfigError> {
        match self {
            ConfigError::Multiple(errors) => errors
                .into_iter()
                .flat_map(ConfigError::into_violations)
                .collect(),
            other => vec![other],
        }
    }
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
