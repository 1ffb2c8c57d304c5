use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::value_objects::invariants::ensure_in_range;

/// A character level between 1 and 20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(value: u8) -> DomainResult<Self> {
        ensure_in_range(value, Self::MIN..=Self::MAX, "level")?;
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(Level::new(0).is_err());
        assert_eq!(Level::new(1).unwrap().value(), 1);
        assert_eq!(Level::new(20).unwrap().value(), 20);
        assert!(Level::new(21).unwrap_err().is_invalid_data());
    }
}
