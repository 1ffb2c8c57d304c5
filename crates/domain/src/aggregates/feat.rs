//! Feat aggregate - an optional talent with ability prerequisites

use crate::error::DomainResult;
use crate::ids::FeatId;
use crate::types::Modifier;
use crate::value_objects::invariants::{
    ensure_distinct, ensure_distinct_by, ensure_in_range, ensure_list_changed,
};
use crate::value_objects::{impl_fields, Description, Name};

/// A minimum ability score needed to take a feat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequiredModifier {
    modifier: Modifier,
    min_value: u8,
}

impl RequiredModifier {
    pub fn new(modifier: Modifier, min_value: u8) -> DomainResult<Self> {
        ensure_in_range(min_value, 1..=20, "min value")?;
        Ok(Self {
            modifier,
            min_value,
        })
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn min_value(&self) -> u8 {
        self.min_value
    }
}

#[derive(Debug, Clone)]
pub struct Feat {
    id: FeatId,
    name: Name,
    description: Description,
    required_modifiers: Vec<RequiredModifier>,
    increase_modifiers: Vec<Modifier>,
}

impl_fields!(Feat {
    name: name,
    description: description,
});

identity_eq!(Feat, FeatId);

impl Feat {
    pub fn new(
        id: FeatId,
        name: &str,
        description: &str,
        required_modifiers: Vec<RequiredModifier>,
        increase_modifiers: Vec<Modifier>,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        validate_required_modifiers(&required_modifiers)?;
        ensure_distinct(&increase_modifiers, "increase modifiers")?;

        Ok(Self {
            id,
            name,
            description,
            required_modifiers,
            increase_modifiers,
        })
    }

    #[inline]
    pub fn id(&self) -> FeatId {
        self.id
    }

    pub fn required_modifiers(&self) -> &[RequiredModifier] {
        &self.required_modifiers
    }

    pub fn increase_modifiers(&self) -> &[Modifier] {
        &self.increase_modifiers
    }

    pub fn new_required_modifiers(&mut self, modifiers: Vec<RequiredModifier>) -> DomainResult<()> {
        ensure_list_changed(&self.required_modifiers, &modifiers, "required modifiers")?;
        validate_required_modifiers(&modifiers)?;
        self.required_modifiers = modifiers;
        Ok(())
    }

    pub fn new_increase_modifiers(&mut self, modifiers: Vec<Modifier>) -> DomainResult<()> {
        ensure_list_changed(&self.increase_modifiers, &modifiers, "increase modifiers")?;
        ensure_distinct(&modifiers, "increase modifiers")?;
        self.increase_modifiers = modifiers;
        Ok(())
    }
}

fn validate_required_modifiers(modifiers: &[RequiredModifier]) -> DomainResult<()> {
    ensure_distinct_by(modifiers, |m| m.modifier(), "required modifiers")
}
