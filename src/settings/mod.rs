//! Key sheets: serializable machine settings.
//!
//! A key sheet holds everything needed to build a machine: rotor order,
//! starting positions, ring settings and plugboard cables. Two parties
//! holding the same sheet build machines that undo each other's output.
//! Only configuration is stored, never the running rotor state.

use crate::builder::ConfigError;
use crate::core::Plugboard;
use crate::machine::{Machine, ROTOR_COUNT};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SettingsError;

/// Version identifier for the key sheet format
pub const SETTINGS_VERSION: u32 = 1;

/// Serializable machine settings.
///
/// # Example
///
/// ```rust
/// use rotorcipher::settings::MachineSettings;
///
/// let sheet = MachineSettings::from_text("1 2 3", "0 0 0", "AB CD").unwrap();
/// let json = sheet.to_json().unwrap();
///
/// let restored = MachineSettings::from_json(&json).unwrap();
/// let mut machine = restored.build().unwrap();
/// assert_eq!(machine.positions().indices(), [1, 2, 3]);
/// assert_eq!(machine.process("abc").len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Key sheet format version
    pub version: u32,

    /// Catalog rotor indices, left to right
    pub rotors: Vec<usize>,

    /// Starting window positions, left to right
    pub positions: Vec<i32>,

    /// Ring settings, left to right
    pub ring_settings: Vec<i32>,

    /// Plugboard cables as space-separated pairs, e.g. `"AB CD"`
    #[serde(default)]
    pub plugboard: String,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            rotors: (0..ROTOR_COUNT).collect(),
            positions: vec![0; ROTOR_COUNT],
            ring_settings: vec![0; ROTOR_COUNT],
            plugboard: String::new(),
        }
    }
}

impl MachineSettings {
    /// Parse the text forms an operator types in: positions and ring
    /// settings as whitespace-separated numbers (`"0 0 0"`) and plugboard
    /// cables as letter pairs (`"AB CD"`). Rotors default to I-II-III.
    pub fn from_text(
        positions: &str,
        ring_settings: &str,
        plugboard: &str,
    ) -> Result<Self, ConfigError> {
        let positions = parse_numbers(positions)?;
        let ring_settings = parse_numbers(ring_settings)?;
        let plugboard: Plugboard = plugboard.parse()?;

        Ok(Self {
            positions,
            ring_settings,
            plugboard: plugboard.to_string(),
            ..Self::default()
        })
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SettingsError::SerializationFailed(err.to_string()))
    }

    /// Load a key sheet, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|err| SettingsError::DeserializationFailed(err.to_string()))?;

        if settings.version != SETTINGS_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_VERSION,
            });
        }

        Ok(settings)
    }

    /// Build a fresh machine from this sheet.
    pub fn build(&self) -> Result<Machine, SettingsError> {
        let plugboard: Plugboard = self.plugboard.parse()?;
        let pairs: Vec<(char, char)> = plugboard
            .pairs()
            .iter()
            .map(|&(a, b)| (a.to_char(), b.to_char()))
            .collect();

        let machine = Machine::new(&self.rotors, &self.positions, &self.ring_settings, &pairs)?;
        Ok(machine)
    }
}

/// Parse whitespace-separated whole numbers such as `"0 12 25"`.
pub fn parse_numbers(text: &str) -> Result<Vec<i32>, ConfigError> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| ConfigError::MalformedNumber {
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numbers_splits_on_whitespace() {
        assert_eq!(parse_numbers(" 1  2\t3 ").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_numbers("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn parse_numbers_rejects_garbage() {
        assert_eq!(
            parse_numbers("1 x 3"),
            Err(ConfigError::MalformedNumber {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn from_text_normalizes_plugboard() {
        let sheet = MachineSettings::from_text("0 0 0", "1 1 1", "ab  cd").unwrap();
        assert_eq!(sheet.plugboard, "AB CD");
        assert_eq!(sheet.ring_settings, vec![1, 1, 1]);
        assert_eq!(sheet.rotors, vec![0, 1, 2]);
    }

    #[test]
    fn from_text_rejects_bad_plugboard() {
        let result = MachineSettings::from_text("0 0 0", "0 0 0", "AB BC");
        assert_eq!(
            result,
            Err(ConfigError::DuplicatePlugLetter { letter: 'B' })
        );
    }

    #[test]
    fn json_round_trip_preserves_sheet() {
        let sheet = MachineSettings::from_text("5 10 15", "2 4 6", "AZ QW").unwrap();
        let json = sheet.to_json().unwrap();
        assert_eq!(MachineSettings::from_json(&json).unwrap(), sheet);
    }

    #[test]
    fn missing_plugboard_defaults_to_empty() {
        let json = r#"{"version":1,"rotors":[0,1,2],"positions":[0,0,0],"ring_settings":[0,0,0]}"#;
        let sheet = MachineSettings::from_json(json).unwrap();
        assert!(sheet.plugboard.is_empty());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let json = r#"{"version":2,"rotors":[0,1,2],"positions":[0,0,0],"ring_settings":[0,0,0]}"#;
        let result = MachineSettings::from_json(json);
        assert!(matches!(
            result,
            Err(SettingsError::UnsupportedVersion {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = MachineSettings::from_json("{not json");
        assert!(matches!(
            result,
            Err(SettingsError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn build_surfaces_config_errors() {
        let sheet = MachineSettings {
            rotors: vec![0, 1],
            ..MachineSettings::default()
        };
        assert!(matches!(
            sheet.build(),
            Err(SettingsError::Config(ConfigError::WrongRotorCount { .. }))
        ));
    }

    #[test]
    fn sheets_build_matching_machines() {
        let sheet = MachineSettings::from_text("3 7 11", "1 2 3", "EX").unwrap();
        let ciphertext = sheet.build().unwrap().process("KEY SHEET");
        let plaintext = sheet.build().unwrap().process(&ciphertext);
        assert_eq!(plaintext, "KEY SHEET");
    }
}
