//! Aggregate roots - rules entities that own their related data
//!
//! Each aggregate:
//! - Has a unique identity and compares equal by that identity only
//! - Validates every field in `new()` before building anything
//! - Exposes behavior through `new_*` mutators, not public fields
//! - Rejects a mutation that would change nothing with `DomainError::Idempotent`

/// Identity equality: against the same aggregate type or a bare identifier.
macro_rules! identity_eq {
    ($ty:ty, $id:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl PartialEq<$id> for $ty {
            fn eq(&self, other: &$id) -> bool {
                self.id == *other
            }
        }
    };
}

pub mod class;
pub mod class_level;
pub mod feat;
pub mod feature;
pub mod race;
pub mod subrace;
pub mod weapon;
pub mod weapon_kind;
pub mod weapon_property;

pub use class::{CharacterClass, ClassHits, ClassProficiencies};
pub use class_level::{Annotated, ClassLevel};
pub use feat::{Feat, RequiredModifier};
pub use feature::{ClassFeature, Feature, SubclassFeature};
pub use race::Race;
pub use subrace::Subrace;
pub use weapon::Weapon;
pub use weapon_kind::WeaponKind;
pub use weapon_property::WeaponProperty;
