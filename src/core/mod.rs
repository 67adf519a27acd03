//! Core cipher components.
//!
//! This module contains the value types the machine is assembled from:
//! - `Letter`, the alphabet index every component works on
//! - `Rotor` and its fixed catalog, `Reflector`, and `Plugboard`
//! - `RotorPositions`, the machine state, and `StepHistory`
//!
//! Nothing here performs I/O.

mod history;
mod letter;
mod plugboard;
mod reflector;
mod rotor;
mod state;
mod wiring;

pub use history::{StepHistory, StepRecord};
pub use letter::{Letter, ALPHABET, ALPHABET_LEN};
pub use plugboard::Plugboard;
pub use reflector::{Reflector, REFLECTOR_B};
pub use rotor::{Rotor, RotorId, RotorSpec, ROTOR_I, ROTOR_II, ROTOR_III};
pub use state::{RotorPositions, StepKind};
