//! Dice value objects
//!
//! A `Dice` is a count of identical dice such as "1d8" or "2d6". Hit dice,
//! weapon damage, versatile second-hand damage and class-level dice all use it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};
use crate::types::closed_set::closed_enum;

closed_enum! {
    /// Polyhedral die sizes used by the rules.
    pub enum DiceType("dice type") {
        D4 = "D4",
        D6 = "D6",
        D8 = "D8",
        D10 = "D10",
        D12 = "D12",
        D20 = "D20",
    }
}

impl DiceType {
    /// Number of faces on the die.
    pub const fn sides(&self) -> u8 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
        }
    }
}

/// A number of dice of one type, written "XdY"
///
/// # Invariants
///
/// - `count` is at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dice {
    count: u8,
    dice_type: DiceType,
}

impl Dice {
    /// Create a validated dice expression.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if `count` is zero.
    pub fn new(count: u8, dice_type: DiceType) -> DomainResult<Self> {
        if count == 0 {
            return Err(DomainError::invalid_data("Dice count must be at least 1"));
        }
        Ok(Self { count, dice_type })
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn dice_type(&self) -> DiceType {
        self.dice_type
    }

    /// Highest total the dice can roll.
    pub fn max_total(&self) -> u16 {
        u16::from(self.count) * u16::from(self.dice_type.sides())
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.dice_type.sides())
    }
}

impl FromStr for Dice {
    type Err = DomainError;

    /// Parse "XdY" (or "dY" for a single die).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let (count, sides) = input
            .split_once('d')
            .ok_or_else(|| DomainError::invalid_data(format!("Invalid dice '{}'", s)))?;

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse::<u8>()
                .map_err(|_| DomainError::invalid_data(format!("Invalid dice count in '{}'", s)))?
        };
        let dice_type: DiceType = format!("D{}", sides).parse()?;

        Self::new(count, dice_type)
    }
}

impl TryFrom<String> for Dice {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dice> for String {
    fn from(dice: Dice) -> String {
        dice.to_string()
    }
}
