//! In-memory repository implementations.
//!
//! Every store is constructed explicitly and shared through `Arc`. Rows are
//! cloned in and out, so a caller never holds a reference into a store.

use std::sync::Arc;

use grimoire_domain::Named;

mod armory_repo;
mod class_repo;
mod feat_repo;
mod race_repo;
mod registry;
mod table;

pub use armory_repo::{MemoryWeaponKindRepo, MemoryWeaponPropertyRepo, MemoryWeaponRepo};
pub use class_repo::{
    MemoryClassFeatureRepo, MemoryClassLevelRepo, MemoryClassRepo, MemorySubclassFeatureRepo,
};
pub use feat_repo::MemoryFeatRepo;
pub use race_repo::{MemoryRaceRepo, MemorySubraceRepo};
pub use registry::{
    MemoryRegistry, MemorySourceRepo, MemorySubclassRepo, MemoryToolRepo, MemoryUserRepo,
};

fn sorted_by_name<T: Named>(mut rows: Vec<T>) -> Vec<T> {
    rows.sort_by(|a, b| a.name().cmp(b.name()));
    rows
}

/// Every in-memory store the engine needs.
pub struct MemoryRepositories {
    pub class: Arc<MemoryClassRepo>,
    pub class_level: Arc<MemoryClassLevelRepo>,
    pub class_feature: Arc<MemoryClassFeatureRepo>,
    pub subclass_feature: Arc<MemorySubclassFeatureRepo>,
    pub race: Arc<MemoryRaceRepo>,
    pub subrace: Arc<MemorySubraceRepo>,
    pub weapon_kind: Arc<MemoryWeaponKindRepo>,
    pub weapon_property: Arc<MemoryWeaponPropertyRepo>,
    pub weapon: Arc<MemoryWeaponRepo>,
    pub feat: Arc<MemoryFeatRepo>,
    pub users: Arc<MemoryUserRepo>,
    pub sources: Arc<MemorySourceRepo>,
    pub tools: Arc<MemoryToolRepo>,
    pub subclasses: Arc<MemorySubclassRepo>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self {
            class: Arc::new(MemoryClassRepo::new()),
            class_level: Arc::new(MemoryClassLevelRepo::new()),
            class_feature: Arc::new(MemoryClassFeatureRepo::new()),
            subclass_feature: Arc::new(MemorySubclassFeatureRepo::new()),
            race: Arc::new(MemoryRaceRepo::new()),
            subrace: Arc::new(MemorySubraceRepo::new()),
            weapon_kind: Arc::new(MemoryWeaponKindRepo::new()),
            weapon_property: Arc::new(MemoryWeaponPropertyRepo::new()),
            weapon: Arc::new(MemoryWeaponRepo::new()),
            feat: Arc::new(MemoryFeatRepo::new()),
            users: Arc::new(MemoryUserRepo::new()),
            sources: Arc::new(MemorySourceRepo::new()),
            tools: Arc::new(MemoryToolRepo::new()),
            subclasses: Arc::new(MemorySubclassRepo::new()),
        }
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
