//! Type-safe arrival ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Arrival number assigned to a patient when they are added.
///
/// Ids start at 1, grow by exactly one per add and are never reused,
/// so they double as the tie-breaker between patients of equal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrivalId(u64);

impl ArrivalId {
    /// The id handed to the first patient of a session.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Wraps a raw arrival number.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the id that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw arrival number.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArrivalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ArrivalId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_next() {
        let id = ArrivalId::first();
        assert_eq!(id.value(), 1);
        assert_eq!(id.next().value(), 2);
        assert_eq!(id.next().next(), ArrivalId::new(3));
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<ArrivalId>(), Ok(ArrivalId::new(42)));
        assert!("abc".parse::<ArrivalId>().is_err());
        assert!("-1".parse::<ArrivalId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ArrivalId::new(7).to_string(), "7");
        assert_eq!(format!("{:<6}|", ArrivalId::new(12)), "12    |");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ArrivalId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
