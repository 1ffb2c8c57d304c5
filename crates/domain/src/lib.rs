//! Grimoire domain - rules entities for a tabletop RPG reference catalogue
//!
//! Pure and synchronous: typed identifiers, closed vocabularies, validated
//! value objects and the aggregates built from them. Nothing here touches
//! storage; uniqueness and existence checks live in the engine.

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::{
    Annotated, CharacterClass, ClassFeature, ClassHits, ClassLevel, ClassProficiencies, Feat,
    Feature, Race, RequiredModifier, Subrace, SubclassFeature, Weapon, WeaponKind,
    WeaponProperty,
};
pub use error::{DomainError, DomainResult};
pub use ids::{
    ClassFeatureId, ClassId, ClassLevelId, FeatId, RaceId, SourceId, SubclassFeatureId,
    SubclassId, SubraceId, ToolId, UserId, WeaponId, WeaponKindId, WeaponPropertyId,
};
pub use types::{
    ArmorType, CreatureSize, CreatureType, DamageType, Modifier, Skill, WeaponPropertyName,
    WeaponType,
};
pub use value_objects::{
    Age, Described, Description, Dice, DiceType, EnglishNamed, IncreaseModifier, Level, Name,
    NameInEnglish, Named, RaceFeature, Sourced, Speed,
};
