//! ClassLevel aggregate - what a class gains at one level
//!
//! Besides the proficiency bonus a level may carry three optional
//! class-specific resources (a die such as martial arts, a point pool such as
//! ki, flat bonus damage such as rage). Each one comes with a description
//! explaining it, and a value without its description (or the reverse) is
//! rejected. Value and description change together.

use crate::error::DomainResult;
use crate::ids::{ClassId, ClassLevelId};
use crate::value_objects::invariants::{ensure_changed, ensure_in_range, ensure_paired};
use crate::value_objects::{Description, Dice, Level};

/// A value paired with the text that explains it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotated<T> {
    value: T,
    description: Description,
}

impl<T: Copy> Annotated<T> {
    pub fn value(&self) -> T {
        self.value
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Build an optional annotated value from its two halves.
fn annotate<T>(
    value: Option<T>,
    description: Option<&str>,
    field: &str,
) -> DomainResult<Option<Annotated<T>>> {
    ensure_paired(value.is_some(), description.is_some(), field)?;
    match (value, description) {
        (Some(value), Some(description)) => Ok(Some(Annotated {
            value,
            description: Description::new(description)?,
        })),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct ClassLevel {
    id: ClassLevelId,
    class_id: ClassId,
    level: Level,
    proficiency_bonus: u8,
    dice: Option<Annotated<Dice>>,
    points: Option<Annotated<u16>>,
    bonus_damage: Option<Annotated<u16>>,
}

identity_eq!(ClassLevel, ClassLevelId);

impl ClassLevel {
    pub const PROFICIENCY_BONUS_MIN: u8 = 2;
    pub const PROFICIENCY_BONUS_MAX: u8 = 6;

    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if the level or proficiency bonus
    /// is out of range, or a value/description pair is incomplete.
    pub fn new(
        id: ClassLevelId,
        class_id: ClassId,
        level: u8,
        proficiency_bonus: u8,
        dice: Option<Dice>,
        dice_description: Option<&str>,
        points: Option<u16>,
        points_description: Option<&str>,
        bonus_damage: Option<u16>,
        bonus_damage_description: Option<&str>,
    ) -> DomainResult<Self> {
        let level = Level::new(level)?;
        validate_proficiency_bonus(proficiency_bonus)?;
        let dice = annotate(dice, dice_description, "dice")?;
        let points = annotate(points, points_description, "points")?;
        let bonus_damage = annotate(bonus_damage, bonus_damage_description, "bonus_damage")?;

        Ok(Self {
            id,
            class_id,
            level,
            proficiency_bonus,
            dice,
            points,
            bonus_damage,
        })
    }

    #[inline]
    pub fn id(&self) -> ClassLevelId {
        self.id
    }

    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn proficiency_bonus(&self) -> u8 {
        self.proficiency_bonus
    }

    pub fn dice(&self) -> Option<&Annotated<Dice>> {
        self.dice.as_ref()
    }

    pub fn points(&self) -> Option<&Annotated<u16>> {
        self.points.as_ref()
    }

    pub fn bonus_damage(&self) -> Option<&Annotated<u16>> {
        self.bonus_damage.as_ref()
    }

    pub fn new_level(&mut self, level: u8) -> DomainResult<()> {
        ensure_changed(&self.level.value(), &level, "level")?;
        self.level = Level::new(level)?;
        Ok(())
    }

    pub fn new_proficiency_bonus(&mut self, bonus: u8) -> DomainResult<()> {
        ensure_changed(&self.proficiency_bonus, &bonus, "proficiency bonus")?;
        validate_proficiency_bonus(bonus)?;
        self.proficiency_bonus = bonus;
        Ok(())
    }

    /// Replace the dice pair. Passing `None` for both clears it.
    pub fn new_dice(&mut self, dice: Option<Dice>, description: Option<&str>) -> DomainResult<()> {
        let dice = annotate(dice, description, "dice")?;
        ensure_changed(&self.dice, &dice, "dice")?;
        self.dice = dice;
        Ok(())
    }

    pub fn new_points(&mut self, points: Option<u16>, description: Option<&str>) -> DomainResult<()> {
        let points = annotate(points, description, "points")?;
        ensure_changed(&self.points, &points, "points")?;
        self.points = points;
        Ok(())
    }

    pub fn new_bonus_damage(
        &mut self,
        bonus_damage: Option<u16>,
        description: Option<&str>,
    ) -> DomainResult<()> {
        let bonus_damage = annotate(bonus_damage, description, "bonus_damage")?;
        ensure_changed(&self.bonus_damage, &bonus_damage, "bonus damage")?;
        self.bonus_damage = bonus_damage;
        Ok(())
    }
}

fn validate_proficiency_bonus(bonus: u8) -> DomainResult<()> {
    ensure_in_range(
        bonus,
        ClassLevel::PROFICIENCY_BONUS_MIN..=ClassLevel::PROFICIENCY_BONUS_MAX,
        "proficiency bonus",
    )
}
