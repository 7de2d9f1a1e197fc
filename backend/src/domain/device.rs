//! Lock commands understood by the device endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Command relayed to the lock controller.
///
/// Serialises to the lowercase wire names the device expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCommand {
    Lock,
    Unlock,
}

impl DeviceCommand {
    /// Wire name sent to the device.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }

    /// Parse a raw command string; the device treats commands
    /// case-insensitively, so we do too.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "lock" => Some(Self::Lock),
            "unlock" => Some(Self::Unlock),
            _ => None,
        }
    }

    /// Message shown to the panel when the device acknowledged the command.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Lock => "Successfully locked!",
            Self::Unlock => "Successfully unlocked!",
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("lock", Some(DeviceCommand::Lock))]
    #[case("unlock", Some(DeviceCommand::Unlock))]
    #[case("UNLOCK", Some(DeviceCommand::Unlock))]
    #[case(" lock ", Some(DeviceCommand::Lock))]
    #[case("open", None)]
    #[case("", None)]
    fn parses_known_commands(#[case] raw: &str, #[case] expected: Option<DeviceCommand>) {
        assert_eq!(DeviceCommand::parse(raw), expected);
    }

    #[test]
    fn serialises_lowercase() {
        let value = serde_json::to_value(DeviceCommand::Unlock).expect("command serialises");
        assert_eq!(value, serde_json::json!("unlock"));
    }

    #[rstest]
    #[case(DeviceCommand::Lock, "Successfully locked!")]
    #[case(DeviceCommand::Unlock, "Successfully unlocked!")]
    fn success_messages_match_panel_copy(#[case] command: DeviceCommand, #[case] expected: &str) {
        assert_eq!(command.success_message(), expected);
    }
}
