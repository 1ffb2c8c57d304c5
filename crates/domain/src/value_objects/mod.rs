//! Value objects - Immutable objects defined by their attributes

mod dice;
mod fields;
pub mod invariants;
mod level;
mod racial;

pub use dice::{Dice, DiceType};
pub(crate) use fields::impl_fields;
pub use fields::{
    Described, Description, EnglishNamed, Name, NameInEnglish, Named, Sourced, MAX_NAME_LENGTH,
};
pub use level::Level;
pub use racial::{
    validate_features, validate_increase_modifiers, Age, IncreaseModifier, RaceFeature, Speed,
};
