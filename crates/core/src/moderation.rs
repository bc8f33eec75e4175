//! Moderation lifecycle for patient-submitted content.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Moderation status stored per patient-submitted content item.
///
/// New submissions start in `OnModerate` and an administrator moves them
/// to `Ok` or `Reject`. Stored as text (`on_moderate` / `ok` / `reject`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    OnModerate,
    Ok,
    Reject,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::OnModerate => "on_moderate",
            ModerationStatus::Ok => "ok",
            ModerationStatus::Reject => "reject",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_moderate" => Ok(ModerationStatus::OnModerate),
            "ok" => Ok(ModerationStatus::Ok),
            "reject" => Ok(ModerationStatus::Reject),
            other => Err(CoreError::Validation(format!(
                "Unknown moderation status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_encoding_roundtrip() {
        for status in [
            ModerationStatus::OnModerate,
            ModerationStatus::Ok,
            ModerationStatus::Reject,
        ] {
            assert_eq!(status.as_str().parse::<ModerationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("approved".parse::<ModerationStatus>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ModerationStatus::OnModerate).unwrap(),
            "\"on_moderate\""
        );
    }
}
