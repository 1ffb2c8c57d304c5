//! Level-gated features owned by a class or a subclass
//!
//! Class features and subclass features share one shape: a name unique within
//! the owner, a description and the level at which the feature is gained.

use crate::error::DomainResult;
use crate::ids::{ClassFeatureId, ClassId, SubclassFeatureId, SubclassId};
use crate::value_objects::invariants::ensure_changed;
use crate::value_objects::{Described, Description, Level, Name, Named};

#[derive(Debug, Clone)]
pub struct Feature<Id, Owner> {
    id: Id,
    owner_id: Owner,
    name: Name,
    description: Description,
    level: Level,
}

/// A feature granted by a class.
pub type ClassFeature = Feature<ClassFeatureId, ClassId>;

/// A feature granted by a subclass.
pub type SubclassFeature = Feature<SubclassFeatureId, SubclassId>;

impl<Id: Copy, Owner: Copy> Feature<Id, Owner> {
    pub fn new(
        id: Id,
        owner_id: Owner,
        name: &str,
        description: &str,
        level: u8,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        let level = Level::new(level)?;
        Ok(Self {
            id,
            owner_id,
            name,
            description,
            level,
        })
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// The class or subclass the feature belongs to.
    pub fn owner_id(&self) -> Owner {
        self.owner_id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn new_level(&mut self, level: u8) -> DomainResult<()> {
        ensure_changed(&self.level.value(), &level, "level")?;
        self.level = Level::new(level)?;
        Ok(())
    }
}

impl<Id, Owner> Named for Feature<Id, Owner> {
    fn name_field(&self) -> &Name {
        &self.name
    }

    fn name_field_mut(&mut self) -> &mut Name {
        &mut self.name
    }
}

impl<Id, Owner> Described for Feature<Id, Owner> {
    fn description_field(&self) -> &Description {
        &self.description
    }

    fn description_field_mut(&mut self) -> &mut Description {
        &mut self.description
    }
}

impl<Id: PartialEq, Owner> PartialEq for Feature<Id, Owner> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Id: Eq, Owner> Eq for Feature<Id, Owner> {}

impl PartialEq<ClassFeatureId> for ClassFeature {
    fn eq(&self, other: &ClassFeatureId) -> bool {
        self.id == *other
    }
}

impl PartialEq<SubclassFeatureId> for SubclassFeature {
    fn eq(&self, other: &SubclassFeatureId) -> bool {
        self.id == *other
    }
}
