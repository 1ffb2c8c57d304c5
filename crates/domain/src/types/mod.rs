//! Shared rules vocabulary - closed enumerations used across aggregates

pub mod closed_set;

mod abilities;
mod armory;
mod creature;

pub use abilities::{ArmorType, Modifier, Skill};
pub use armory::{DamageType, WeaponPropertyName, WeaponType};
pub use closed_set::{parse_closed, ClosedSet};
pub use creature::{CreatureSize, CreatureType};
