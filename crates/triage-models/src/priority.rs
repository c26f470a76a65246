//! Triage priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Priority level assigned to a patient on arrival.
///
/// Lower code = more urgent. `Immediate` (1) is served before
/// `Emergency` (2), `Urgent` (3) and `Minimal` (4), so the derived `Ord`
/// follows declaration order and sorts the most urgent level first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Immediate (1).
    Immediate,
    /// Emergency (2).
    Emergency,
    /// Urgent (3).
    Urgent,
    /// Minimal (4).
    Minimal,
}

/// Error returned when a priority name or code is not one of the four levels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct UnknownPriority(pub String);

impl Priority {
    /// All levels, most urgent first.
    pub const ALL: [Priority; 4] = [
        Priority::Immediate,
        Priority::Emergency,
        Priority::Urgent,
        Priority::Minimal,
    ];

    /// Returns the numeric triage code (1-4).
    pub fn code(&self) -> u8 {
        match self {
            Priority::Immediate => 1,
            Priority::Emergency => 2,
            Priority::Urgent => 3,
            Priority::Minimal => 4,
        }
    }

    /// Returns the user-facing name used by commands and replay logs.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Immediate => "immediate",
            Priority::Emergency => "emergency",
            Priority::Urgent => "urgent",
            Priority::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Priority {
    type Err = UnknownPriority;

    /// Names are matched exactly; `Urgent` or `URGENT` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Priority::Immediate.code(), 1);
        assert_eq!(Priority::Emergency.code(), 2);
        assert_eq!(Priority::Urgent.code(), 3);
        assert_eq!(Priority::Minimal.code(), 4);
    }

    #[test]
    fn test_ordering_most_urgent_first() {
        assert!(Priority::Immediate < Priority::Emergency);
        assert!(Priority::Emergency < Priority::Urgent);
        assert!(Priority::Urgent < Priority::Minimal);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("immediate".parse::<Priority>(), Ok(Priority::Immediate));
        assert_eq!("emergency".parse::<Priority>(), Ok(Priority::Emergency));
        assert_eq!("urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!("minimal".parse::<Priority>(), Ok(Priority::Minimal));
    }

    #[test]
    fn test_parse_rejects_unknown_and_case() {
        assert_eq!(
            "critical".parse::<Priority>(),
            Err(UnknownPriority("critical".to_string()))
        );
        assert!("Urgent".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Priority::Emergency.to_string(), "emergency");
    }

    #[test]
    fn test_display_honours_width() {
        let padded = format!("{:<14}", Priority::Immediate);
        assert_eq!(padded.len(), 14);
        assert_eq!(padded, "immediate     ");
        assert_eq!(format!("{:>8}", Priority::Urgent), "  urgent");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Priority::Immediate).unwrap();
        assert_eq!(json, "\"immediate\"");
        let back: Priority = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(back, Priority::Minimal);
    }
}
