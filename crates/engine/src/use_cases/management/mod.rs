//! Management use cases for the rules catalogue.
//!
//! One module per aggregate. Every module follows the same flow: check the
//! caller, check name availability and foreign references, then build or
//! mutate the aggregate and save it in one step.

pub mod class;
pub mod class_feature;
pub mod class_level;
pub mod feat;
pub mod race;
pub mod subclass_feature;
pub mod subrace;
pub mod weapon;
pub mod weapon_kind;
pub mod weapon_property;

pub use class::ClassUseCases;
pub use class_feature::ClassFeatureUseCases;
pub use class_level::ClassLevelUseCases;
pub use feat::FeatUseCases;
pub use race::RaceUseCases;
pub use subclass_feature::SubclassFeatureUseCases;
pub use subrace::SubraceUseCases;
pub use weapon::WeaponUseCases;
pub use weapon_kind::WeaponKindUseCases;
pub use weapon_property::WeaponPropertyUseCases;
