//! Domain services that need storage to answer.

pub mod name_policy;

pub use name_policy::{
    ClassFeatureNamePolicy, ClassNamePolicy, FeatNamePolicy, RaceNamePolicy,
    SubclassFeatureNamePolicy, SubraceNamePolicy, UniqueNamePolicy, ScopedNamePolicy,
    WeaponKindNamePolicy, WeaponNamePolicy, WeaponPropertyNamePolicy,
};
