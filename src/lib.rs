//! Rotorcipher: a three-rotor electromechanical cipher machine simulator
//!
//! The machine chains three rotating rotors, a fixed reflector and a
//! plugboard into a single substitution that changes on every keystroke.
//! Because the signal passes through the reflector and back, the whole
//! transform is its own inverse: decrypting is encrypting again from the
//! same starting settings.
//!
//! # Core Concepts
//!
//! - **Rotor**: a wired permutation with a notch, a ring setting and a position
//! - **Reflector**: a fixed self-inverse permutation
//! - **Plugboard**: pairwise letter swaps at the keyboard boundary
//! - **Machine**: steps the rotors (including the middle-rotor double step)
//!   and routes each letter through the signal path
//!
//! Construction validates every setting up front and fails with a
//! [`ConfigError`]; processing text never fails. Characters outside `A`-`Z`
//! are copied through without moving the rotors.
//!
//! # Example
//!
//! ```rust
//! use rotorcipher::Machine;
//!
//! let mut encoder = Machine::builder()
//!     .rotors(&[0, 1, 2])
//!     .positions(&[0, 0, 0])
//!     .ring_settings(&[0, 0, 0])
//!     .build()
//!     .unwrap();
//! let ciphertext = encoder.process("HELLO");
//! assert_eq!(ciphertext, "VNACA");
//!
//! let mut decoder = Machine::new(&[0, 1, 2], &[0, 0, 0], &[0, 0, 0], &[]).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "HELLO");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod settings;

// Re-export commonly used types
pub use builder::{ConfigError, MachineBuilder};
pub use core::{Letter, Plugboard, Reflector, Rotor, RotorId, RotorPositions, StepKind};
pub use machine::Machine;
pub use settings::{MachineSettings, SettingsError};
