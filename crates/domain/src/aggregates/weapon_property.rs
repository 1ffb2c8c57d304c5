//! WeaponProperty aggregate - a rule attached to weapons (finesse, thrown...)
//!
//! # Optional fields depend on the name
//!
//! | name         | base_range | max_range | second_hand_dice |
//! |--------------|------------|-----------|------------------|
//! | `AMMUNITION` | required   | required  | absent           |
//! | `VERSATILE`  | absent     | absent    | required         |
//! | anything else| absent     | absent    | absent           |
//!
//! A rename therefore takes the complete replacement set of optional fields
//! so the table above holds after every call. Ranges can only be edited on
//! its own while the property is `AMMUNITION`, the dice only while it is
//! `VERSATILE`.

use crate::error::{DomainError, DomainResult};
use crate::ids::WeaponPropertyId;
use crate::types::WeaponPropertyName;
use crate::value_objects::invariants::ensure_changed;
use crate::value_objects::{impl_fields, Description, Dice};

#[derive(Debug, Clone)]
pub struct WeaponProperty {
    id: WeaponPropertyId,
    name: WeaponPropertyName,
    description: Description,
    base_range: Option<u16>,
    max_range: Option<u16>,
    second_hand_dice: Option<Dice>,
}

impl_fields!(WeaponProperty {
    description: description,
});

identity_eq!(WeaponProperty, WeaponPropertyId);

impl WeaponProperty {
    pub fn new(
        id: WeaponPropertyId,
        name: WeaponPropertyName,
        description: &str,
        base_range: Option<u16>,
        max_range: Option<u16>,
        second_hand_dice: Option<Dice>,
    ) -> DomainResult<Self> {
        let description = Description::new(description)?;
        validate_optional_fields(name, base_range, max_range, second_hand_dice)?;
        Ok(Self {
            id,
            name,
            description,
            base_range,
            max_range,
            second_hand_dice,
        })
    }

    #[inline]
    pub fn id(&self) -> WeaponPropertyId {
        self.id
    }

    pub fn name(&self) -> WeaponPropertyName {
        self.name
    }

    pub fn base_range(&self) -> Option<u16> {
        self.base_range
    }

    pub fn max_range(&self) -> Option<u16> {
        self.max_range
    }

    pub fn second_hand_dice(&self) -> Option<Dice> {
        self.second_hand_dice
    }

    /// Rename the property together with its full set of optional fields.
    ///
    /// Fields left as `None` are cleared, nothing carries over from the
    /// previous name.
    ///
    /// # Errors
    ///
    /// - `InvalidData` if the fields do not fit the new name
    /// - `Idempotent` if the name is unchanged
    pub fn new_name(
        &mut self,
        name: WeaponPropertyName,
        base_range: Option<u16>,
        max_range: Option<u16>,
        second_hand_dice: Option<Dice>,
    ) -> DomainResult<()> {
        validate_optional_fields(name, base_range, max_range, second_hand_dice)?;
        ensure_changed(&self.name, &name, "name")?;
        self.name = name;
        self.base_range = base_range;
        self.max_range = max_range;
        self.second_hand_dice = second_hand_dice;
        Ok(())
    }

    pub fn new_base_range(&mut self, base_range: u16) -> DomainResult<()> {
        self.require_range_name("base_range")?;
        ensure_changed(&self.base_range, &Some(base_range), "base range")?;
        validate_ranges(base_range, self.max_range.unwrap_or(base_range))?;
        self.base_range = Some(base_range);
        Ok(())
    }

    pub fn new_max_range(&mut self, max_range: u16) -> DomainResult<()> {
        self.require_range_name("max_range")?;
        ensure_changed(&self.max_range, &Some(max_range), "max range")?;
        validate_ranges(self.base_range.unwrap_or(max_range), max_range)?;
        self.max_range = Some(max_range);
        Ok(())
    }

    /// Replace both ranges at once.
    pub fn new_ranges(&mut self, base_range: u16, max_range: u16) -> DomainResult<()> {
        self.require_range_name("ranges")?;
        ensure_changed(
            &(self.base_range, self.max_range),
            &(Some(base_range), Some(max_range)),
            "ranges",
        )?;
        validate_ranges(base_range, max_range)?;
        self.base_range = Some(base_range);
        self.max_range = Some(max_range);
        Ok(())
    }

    pub fn new_second_hand_dice(&mut self, dice: Dice) -> DomainResult<()> {
        if !self.name.takes_second_hand_dice() {
            return Err(DomainError::invalid_data(format!(
                "second_hand_dice can only be set on {}, not {}",
                WeaponPropertyName::Versatile,
                self.name
            )));
        }
        ensure_changed(&self.second_hand_dice, &Some(dice), "second hand dice")?;
        self.second_hand_dice = Some(dice);
        Ok(())
    }

    fn require_range_name(&self, field: &str) -> DomainResult<()> {
        if !self.name.takes_range() {
            return Err(DomainError::invalid_data(format!(
                "{} can only be set on {}, not {}",
                field,
                WeaponPropertyName::Ammunition,
                self.name
            )));
        }
        Ok(())
    }
}

/// Check the optional fields against the table in the module docs.
fn validate_optional_fields(
    name: WeaponPropertyName,
    base_range: Option<u16>,
    max_range: Option<u16>,
    second_hand_dice: Option<Dice>,
) -> DomainResult<()> {
    if name.takes_range() {
        match (base_range, max_range) {
            (Some(base), Some(max)) => validate_ranges(base, max)?,
            _ => {
                return Err(DomainError::invalid_data(format!(
                    "{} requires base_range and max_range",
                    name
                )))
            }
        }
    } else if base_range.is_some() || max_range.is_some() {
        return Err(DomainError::invalid_data(format!(
            "{} does not take base_range or max_range",
            name
        )));
    }

    match (name.takes_second_hand_dice(), second_hand_dice) {
        (true, None) => Err(DomainError::invalid_data(format!(
            "{} requires second_hand_dice",
            name
        ))),
        (false, Some(_)) => Err(DomainError::invalid_data(format!(
            "{} does not take second_hand_dice",
            name
        ))),
        _ => Ok(()),
    }
}

fn validate_ranges(base_range: u16, max_range: u16) -> DomainResult<()> {
    if base_range == 0 || max_range == 0 {
        return Err(DomainError::invalid_data("Ranges must be at least 1"));
    }
    if max_range < base_range {
        return Err(DomainError::invalid_data(format!(
            "max_range ({}) cannot be less than base_range ({})",
            max_range, base_range
        )));
    }
    Ok(())
}
