//! Use cases - User story orchestration.
//!
//! Each use case checks the caller, consults the name policies and foreign
//! reference checks, then hands the change to the aggregate and persists it.

pub mod access;
pub mod error;
pub mod management;
pub mod patch;

pub use access::AccessGuard;
pub use error::{ErrorStatus, UseCaseError};
pub use management::{
    ClassFeatureUseCases, ClassLevelUseCases, ClassUseCases, FeatUseCases, RaceUseCases,
    SubclassFeatureUseCases, SubraceUseCases, WeaponKindUseCases, WeaponPropertyUseCases,
    WeaponUseCases,
};
pub use patch::Patch;
