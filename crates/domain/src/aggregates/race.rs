//! Race aggregate - a playable ancestry such as elf or dwarf

use crate::error::DomainResult;
use crate::ids::{RaceId, SourceId};
use crate::types::{CreatureSize, CreatureType};
use crate::value_objects::invariants::{ensure_changed, ensure_list_changed};
use crate::value_objects::{
    impl_fields, validate_features, validate_increase_modifiers, Age, Description,
    IncreaseModifier, Name, NameInEnglish, RaceFeature, Speed,
};

/// A playable race
///
/// # Invariants
///
/// - each modifier appears at most once in `increase_modifiers`
/// - feature names are unique within the race
#[derive(Debug, Clone)]
pub struct Race {
    id: RaceId,
    name: Name,
    description: Description,
    creature_type: CreatureType,
    creature_size: CreatureSize,
    speed: Speed,
    age: Age,
    increase_modifiers: Vec<IncreaseModifier>,
    features: Vec<RaceFeature>,
    name_in_english: NameInEnglish,
    source_id: SourceId,
}

impl_fields!(Race {
    name: name,
    description: description,
    name_in_english: name_in_english,
    source: source_id,
});

identity_eq!(Race, RaceId);

impl Race {
    pub fn new(
        id: RaceId,
        name: &str,
        description: &str,
        creature_type: CreatureType,
        creature_size: CreatureSize,
        speed: Speed,
        age: Age,
        increase_modifiers: Vec<IncreaseModifier>,
        features: Vec<RaceFeature>,
        name_in_english: &str,
        source_id: SourceId,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        validate_increase_modifiers(&increase_modifiers)?;
        validate_features(&features)?;
        let name_in_english = NameInEnglish::new(name_in_english)?;

        Ok(Self {
            id,
            name,
            description,
            creature_type,
            creature_size,
            speed,
            age,
            increase_modifiers,
            features,
            name_in_english,
            source_id,
        })
    }

    #[inline]
    pub fn id(&self) -> RaceId {
        self.id
    }

    pub fn creature_type(&self) -> CreatureType {
        self.creature_type
    }

    pub fn creature_size(&self) -> CreatureSize {
        self.creature_size
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    pub fn age(&self) -> &Age {
        &self.age
    }

    pub fn increase_modifiers(&self) -> &[IncreaseModifier] {
        &self.increase_modifiers
    }

    pub fn features(&self) -> &[RaceFeature] {
        &self.features
    }

    pub fn new_creature_type(&mut self, creature_type: CreatureType) -> DomainResult<()> {
        ensure_changed(&self.creature_type, &creature_type, "creature type")?;
        self.creature_type = creature_type;
        Ok(())
    }

    pub fn new_creature_size(&mut self, creature_size: CreatureSize) -> DomainResult<()> {
        ensure_changed(&self.creature_size, &creature_size, "creature size")?;
        self.creature_size = creature_size;
        Ok(())
    }

    pub fn new_speed(&mut self, speed: Speed) -> DomainResult<()> {
        ensure_changed(&self.speed, &speed, "speed")?;
        self.speed = speed;
        Ok(())
    }

    pub fn new_age(&mut self, age: Age) -> DomainResult<()> {
        ensure_changed(&self.age, &age, "age")?;
        self.age = age;
        Ok(())
    }

    pub fn new_increase_modifiers(&mut self, modifiers: Vec<IncreaseModifier>) -> DomainResult<()> {
        ensure_list_changed(&self.increase_modifiers, &modifiers, "increase modifiers")?;
        validate_increase_modifiers(&modifiers)?;
        self.increase_modifiers = modifiers;
        Ok(())
    }

    pub fn new_features(&mut self, features: Vec<RaceFeature>) -> DomainResult<()> {
        ensure_list_changed(&self.features, &features, "features")?;
        validate_features(&features)?;
        self.features = features;
        Ok(())
    }
}
