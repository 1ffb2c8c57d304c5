//! Racial traits shared by races and subraces

use crate::error::{DomainError, DomainResult};
use crate::types::Modifier;
use crate::value_objects::invariants::{ensure_distinct_by, ensure_in_range};
use crate::value_objects::{Description, Name};

/// A bonus applied to one ability modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncreaseModifier {
    modifier: Modifier,
    bonus: u8,
}

impl IncreaseModifier {
    pub const MAX_BONUS: u8 = 5;

    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if `bonus` is outside 1..=5.
    pub fn new(modifier: Modifier, bonus: u8) -> DomainResult<Self> {
        ensure_in_range(bonus, 1..=Self::MAX_BONUS, "bonus")?;
        Ok(Self { modifier, bonus })
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }
}

/// A named racial feature such as darkvision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaceFeature {
    name: Name,
    description: Description,
}

impl RaceFeature {
    pub fn new(name: &str, description: &str) -> DomainResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            description: Description::new(description)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Walking speed in feet plus free-form notes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Speed {
    base_speed: u16,
    description: String,
}

impl Speed {
    pub fn new(base_speed: u16, description: impl Into<String>) -> DomainResult<Self> {
        if base_speed == 0 {
            return Err(DomainError::invalid_data("Base speed must be at least 1"));
        }
        Ok(Self {
            base_speed,
            description: description.into(),
        })
    }

    pub fn base_speed(&self) -> u16 {
        self.base_speed
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Maximum age in years plus free-form notes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Age {
    max_age: u16,
    description: String,
}

impl Age {
    pub fn new(max_age: u16, description: impl Into<String>) -> DomainResult<Self> {
        if max_age == 0 {
            return Err(DomainError::invalid_data("Max age must be at least 1"));
        }
        Ok(Self {
            max_age,
            description: description.into(),
        })
    }

    pub fn max_age(&self) -> u16 {
        self.max_age
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Each modifier may be increased at most once.
pub fn validate_increase_modifiers(modifiers: &[IncreaseModifier]) -> DomainResult<()> {
    ensure_distinct_by(modifiers, |m| m.modifier(), "increase modifiers")
}

/// Feature names are unique within their owner.
pub fn validate_features(features: &[RaceFeature]) -> DomainResult<()> {
    ensure_distinct_by(features, |f| f.name().to_owned(), "features")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_is_bounded() {
        assert!(IncreaseModifier::new(Modifier::Strength, 0).is_err());
        assert!(IncreaseModifier::new(Modifier::Strength, 5).is_ok());
        assert!(IncreaseModifier::new(Modifier::Strength, 6).is_err());
    }

    #[test]
    fn same_modifier_twice_is_a_duplicate() {
        let list = [
            IncreaseModifier::new(Modifier::Dexterity, 2).unwrap(),
            IncreaseModifier::new(Modifier::Dexterity, 1).unwrap(),
        ];
        assert!(validate_increase_modifiers(&list)
            .unwrap_err()
            .is_invalid_data());
        assert!(validate_increase_modifiers(&[]).is_ok());
    }

    #[test]
    fn feature_names_must_be_unique() {
        let list = [
            RaceFeature::new("Тёмное зрение", "60 футов").unwrap(),
            RaceFeature::new("Тёмное зрение", "120 футов").unwrap(),
        ];
        assert!(validate_features(&list).is_err());
    }

    #[test]
    fn feature_requires_name_and_description() {
        assert!(RaceFeature::new("", "d").is_err());
        assert!(RaceFeature::new("f", "").is_err());
    }

    #[test]
    fn speed_and_age_must_be_positive() {
        assert!(Speed::new(0, "").is_err());
        assert_eq!(Speed::new(30, "").unwrap().base_speed(), 30);
        assert!(Age::new(0, "").is_err());
        assert_eq!(Age::new(350, "эльфы").unwrap().max_age(), 350);
    }
}
