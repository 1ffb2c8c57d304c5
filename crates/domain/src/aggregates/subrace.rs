//! Subrace aggregate - a variant of a parent race (high elf, hill dwarf...)
//!
//! Features can be replaced wholesale with `new_features` or edited
//! incrementally with `add_features` / `remove_features`.

use crate::error::{DomainError, DomainResult};
use crate::ids::{RaceId, SubraceId};
use crate::value_objects::invariants::{ensure_changed, ensure_distinct, ensure_list_changed};
use crate::value_objects::{
    impl_fields, validate_features, validate_increase_modifiers, Description, IncreaseModifier,
    Name, NameInEnglish, RaceFeature,
};

#[derive(Debug, Clone)]
pub struct Subrace {
    id: SubraceId,
    race_id: RaceId,
    name: Name,
    description: Description,
    increase_modifiers: Vec<IncreaseModifier>,
    features: Vec<RaceFeature>,
    name_in_english: NameInEnglish,
}

impl_fields!(Subrace {
    name: name,
    description: description,
    name_in_english: name_in_english,
});

identity_eq!(Subrace, SubraceId);

impl Subrace {
    pub fn new(
        id: SubraceId,
        race_id: RaceId,
        name: &str,
        description: &str,
        increase_modifiers: Vec<IncreaseModifier>,
        features: Vec<RaceFeature>,
        name_in_english: &str,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        validate_increase_modifiers(&increase_modifiers)?;
        validate_features(&features)?;
        let name_in_english = NameInEnglish::new(name_in_english)?;

        Ok(Self {
            id,
            race_id,
            name,
            description,
            increase_modifiers,
            features,
            name_in_english,
        })
    }

    #[inline]
    pub fn id(&self) -> SubraceId {
        self.id
    }

    pub fn race_id(&self) -> RaceId {
        self.race_id
    }

    pub fn increase_modifiers(&self) -> &[IncreaseModifier] {
        &self.increase_modifiers
    }

    pub fn features(&self) -> &[RaceFeature] {
        &self.features
    }

    pub fn new_race_id(&mut self, race_id: RaceId) -> DomainResult<()> {
        ensure_changed(&self.race_id, &race_id, "race id")?;
        self.race_id = race_id;
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

    /// Append features. None of the new names may already be present.
    pub fn add_features(&mut self, features: Vec<RaceFeature>) -> DomainResult<()> {
        if features.is_empty() {
            return Err(DomainError::idempotent("No features to add"));
        }
        if let Some(taken) = features.iter().find(|f| self.has_feature(f.name())) {
            return Err(DomainError::invalid_data(format!(
                "Feature '{}' already exists",
                taken.name()
            )));
        }

        let mut merged = self.features.clone();
        merged.extend(features);
        validate_features(&merged)?;
        self.features = merged;
        Ok(())
    }

    /// Remove features by name. Every name must be present.
    pub fn remove_features(&mut self, names: &[String]) -> DomainResult<()> {
        if names.is_empty() {
            return Err(DomainError::idempotent("No features to remove"));
        }
        ensure_distinct(names, "feature names to remove")?;
        if let Some(missing) = names.iter().find(|name| !self.has_feature(name)) {
            return Err(DomainError::invalid_data(format!(
                "Feature '{}' does not exist",
                missing
            )));
        }

        self.features.retain(|f| !names.iter().any(|name| name == f.name()));
        Ok(())
    }

    fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.name() == name)
    }
}
