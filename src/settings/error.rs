//! Settings error types.

use crate::builder::ConfigError;
use thiserror::Error;

/// Errors that can occur while loading or applying a key sheet
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Key sheet version is not supported by this version
    #[error("Unsupported settings version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Key sheet values do not describe a valid machine
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),
}
