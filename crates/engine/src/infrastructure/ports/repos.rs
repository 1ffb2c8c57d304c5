//! Repository port traits for catalogue storage.
//!
//! Every aggregate port shares one contract:
//! - `next_id` hands out a fresh identifier
//! - `get` returns `Ok(None)` for a missing row, never an error
//! - `save` is an upsert
//! - `delete` fails with `RepoError::NotFound` when the row is absent

use async_trait::async_trait;
use grimoire_domain::*;

use super::error::RepoError;

// =============================================================================
// Classes
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassRepo: Send + Sync {
    fn next_id(&self) -> ClassId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: ClassId) -> Result<bool, RepoError>;
    /// Whether any class lists this weapon among its proficiencies.
    async fn weapon_in_use(&self, weapon_id: WeaponId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: ClassId) -> Result<Option<CharacterClass>, RepoError>;
    async fn list_all(&self) -> Result<Vec<CharacterClass>, RepoError>;
    async fn save(&self, class: &CharacterClass) -> Result<(), RepoError>;
    async fn delete(&self, id: ClassId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassLevelRepo: Send + Sync {
    fn next_id(&self) -> ClassLevelId;

    async fn id_exists(&self, id: ClassLevelId) -> Result<bool, RepoError>;
    /// Whether the class already has a row for this level.
    async fn level_exists(&self, class_id: ClassId, level: u8) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: ClassLevelId) -> Result<Option<ClassLevel>, RepoError>;
    async fn list_for_class(&self, class_id: ClassId) -> Result<Vec<ClassLevel>, RepoError>;
    async fn save(&self, level: &ClassLevel) -> Result<(), RepoError>;
    async fn delete(&self, id: ClassLevelId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassFeatureRepo: Send + Sync {
    fn next_id(&self) -> ClassFeatureId;

    /// Feature names are unique per class, not globally.
    async fn name_exists_in_class(&self, class_id: ClassId, name: &str)
        -> Result<bool, RepoError>;
    async fn id_exists(&self, id: ClassFeatureId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: ClassFeatureId) -> Result<Option<ClassFeature>, RepoError>;
    async fn list_for_class(&self, class_id: ClassId) -> Result<Vec<ClassFeature>, RepoError>;
    async fn save(&self, feature: &ClassFeature) -> Result<(), RepoError>;
    async fn delete(&self, id: ClassFeatureId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubclassFeatureRepo: Send + Sync {
    fn next_id(&self) -> SubclassFeatureId;

    async fn name_exists_in_subclass(
        &self,
        subclass_id: SubclassId,
        name: &str,
    ) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: SubclassFeatureId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: SubclassFeatureId) -> Result<Option<SubclassFeature>, RepoError>;
    async fn list_for_subclass(
        &self,
        subclass_id: SubclassId,
    ) -> Result<Vec<SubclassFeature>, RepoError>;
    async fn save(&self, feature: &SubclassFeature) -> Result<(), RepoError>;
    async fn delete(&self, id: SubclassFeatureId) -> Result<(), RepoError>;
}

// =============================================================================
// Races
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaceRepo: Send + Sync {
    fn next_id(&self) -> RaceId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: RaceId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: RaceId) -> Result<Option<Race>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Race>, RepoError>;
    async fn save(&self, race: &Race) -> Result<(), RepoError>;
    async fn delete(&self, id: RaceId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubraceRepo: Send + Sync {
    fn next_id(&self) -> SubraceId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: SubraceId) -> Result<bool, RepoError>;
    /// Whether any subrace names this race as its parent.
    async fn race_in_use(&self, race_id: RaceId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: SubraceId) -> Result<Option<Subrace>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Subrace>, RepoError>;
    async fn save(&self, subrace: &Subrace) -> Result<(), RepoError>;
    async fn delete(&self, id: SubraceId) -> Result<(), RepoError>;
}

// =============================================================================
// Armory
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaponKindRepo: Send + Sync {
    fn next_id(&self) -> WeaponKindId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: WeaponKindId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: WeaponKindId) -> Result<Option<WeaponKind>, RepoError>;
    async fn list_all(&self) -> Result<Vec<WeaponKind>, RepoError>;
    async fn save(&self, kind: &WeaponKind) -> Result<(), RepoError>;
    async fn delete(&self, id: WeaponKindId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaponPropertyRepo: Send + Sync {
    fn next_id(&self) -> WeaponPropertyId;

    async fn name_exists(&self, name: WeaponPropertyName) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: WeaponPropertyId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: WeaponPropertyId) -> Result<Option<WeaponProperty>, RepoError>;
    async fn list_all(&self) -> Result<Vec<WeaponProperty>, RepoError>;
    async fn save(&self, property: &WeaponProperty) -> Result<(), RepoError>;
    async fn delete(&self, id: WeaponPropertyId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaponRepo: Send + Sync {
    fn next_id(&self) -> WeaponId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: WeaponId) -> Result<bool, RepoError>;

    // Dependents
    async fn kind_in_use(&self, kind_id: WeaponKindId) -> Result<bool, RepoError>;
    async fn property_in_use(&self, property_id: WeaponPropertyId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: WeaponId) -> Result<Option<Weapon>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Weapon>, RepoError>;
    async fn save(&self, weapon: &Weapon) -> Result<(), RepoError>;
    async fn delete(&self, id: WeaponId) -> Result<(), RepoError>;
}

// =============================================================================
// Feats
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatRepo: Send + Sync {
    fn next_id(&self) -> FeatId;

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn id_exists(&self, id: FeatId) -> Result<bool, RepoError>;

    // CRUD
    async fn get(&self, id: FeatId) -> Result<Option<Feat>, RepoError>;
    async fn list_all(&self) -> Result<Vec<Feat>, RepoError>;
    async fn save(&self, feat: &Feat) -> Result<(), RepoError>;
    async fn delete(&self, id: FeatId) -> Result<(), RepoError>;
}

// =============================================================================
// External references (only existence matters here)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn id_exists(&self, id: UserId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceRepo: Send + Sync {
    async fn id_exists(&self, id: SourceId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolRepo: Send + Sync {
    async fn id_exists(&self, id: ToolId) -> Result<bool, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubclassRepo: Send + Sync {
    async fn id_exists(&self, id: SubclassId) -> Result<bool, RepoError>;
}
