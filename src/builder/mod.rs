//! Builder API for machine construction.
//!
//! Construction is the only fallible part of the crate: once a
//! [`Machine`](crate::Machine) exists, processing text cannot fail.

pub mod error;
pub mod machine;
pub(crate) mod validation;

pub use error::ConfigError;
pub use machine::MachineBuilder;
