//! Application state and composition.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::infrastructure::memory::{
    MemoryRepositories, MemorySourceRepo, MemorySubclassRepo, MemoryToolRepo, MemoryUserRepo,
};
use crate::infrastructure::ports::{
    ClassFeatureRepo, ClassLevelRepo, ClassRepo, FeatRepo, RaceRepo, SourceRepo,
    SubclassFeatureRepo, SubclassRepo, SubraceRepo, ToolRepo, UserRepo, WeaponKindRepo,
    WeaponPropertyRepo, WeaponRepo,
};
use crate::seed::{SeedError, SeedFile, SeedSummary};
use crate::use_cases::management::weapon_kind::CreateWeaponKindCommand;
use crate::use_cases::management::weapon_property::CreateWeaponPropertyCommand;
use crate::use_cases::{self, AccessGuard, UseCaseError};

/// Main application state.
///
/// Holds every repository and use case container.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repositories.
///
/// Aggregate stores are injected as port traits. The identifier registries
/// stay concrete so identifiers can be registered at start.
pub struct Repositories {
    pub class: Arc<dyn ClassRepo>,
    pub class_level: Arc<dyn ClassLevelRepo>,
    pub class_feature: Arc<dyn ClassFeatureRepo>,
    pub subclass_feature: Arc<dyn SubclassFeatureRepo>,
    pub race: Arc<dyn RaceRepo>,
    pub subrace: Arc<dyn SubraceRepo>,
    pub weapon_kind: Arc<dyn WeaponKindRepo>,
    pub weapon_property: Arc<dyn WeaponPropertyRepo>,
    pub weapon: Arc<dyn WeaponRepo>,
    pub feat: Arc<dyn FeatRepo>,

    pub users: Arc<MemoryUserRepo>,
    pub sources: Arc<MemorySourceRepo>,
    pub tools: Arc<MemoryToolRepo>,
    pub subclasses: Arc<MemorySubclassRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub class: use_cases::ClassUseCases,
    pub class_level: use_cases::ClassLevelUseCases,
    pub class_feature: use_cases::ClassFeatureUseCases,
    pub subclass_feature: use_cases::SubclassFeatureUseCases,
    pub race: use_cases::RaceUseCases,
    pub subrace: use_cases::SubraceUseCases,
    pub weapon_kind: use_cases::WeaponKindUseCases,
    pub weapon_property: use_cases::WeaponPropertyUseCases,
    pub weapon: use_cases::WeaponUseCases,
    pub feat: use_cases::FeatUseCases,
}

/// Number of rows per aggregate, logged at start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueSummary {
    pub classes: usize,
    pub races: usize,
    pub subraces: usize,
    pub weapon_kinds: usize,
    pub weapon_properties: usize,
    pub weapons: usize,
    pub feats: usize,
}

impl App {
    /// Create an App backed by the in-memory stores, with the configured
    /// admin users already registered.
    pub fn in_memory(config: &EngineConfig) -> Self {
        let app = Self::new(MemoryRepositories::new());
        for user_id in &config.admin_user_ids {
            app.repositories.users.register(*user_id);
        }
        app
    }

    /// Create a new App with all dependencies wired up.
    pub fn new(repos: MemoryRepositories) -> Self {
        let repositories = Repositories {
            class: repos.class,
            class_level: repos.class_level,
            class_feature: repos.class_feature,
            subclass_feature: repos.subclass_feature,
            race: repos.race,
            subrace: repos.subrace,
            weapon_kind: repos.weapon_kind,
            weapon_property: repos.weapon_property,
            weapon: repos.weapon,
            feat: repos.feat,
            users: repos.users,
            sources: repos.sources,
            tools: repos.tools,
            subclasses: repos.subclasses,
        };

        let user_repo: Arc<dyn UserRepo> = repositories.users.clone();
        let source_repo: Arc<dyn SourceRepo> = repositories.sources.clone();
        let tool_repo: Arc<dyn ToolRepo> = repositories.tools.clone();
        let subclass_repo: Arc<dyn SubclassRepo> = repositories.subclasses.clone();
        let access = Arc::new(AccessGuard::new(user_repo));

        let use_cases = UseCases {
            class: use_cases::ClassUseCases::new(
                repositories.class.clone(),
                repositories.class_level.clone(),
                repositories.class_feature.clone(),
                repositories.weapon.clone(),
                tool_repo,
                source_repo.clone(),
                access.clone(),
            ),
            class_level: use_cases::ClassLevelUseCases::new(
                repositories.class_level.clone(),
                repositories.class.clone(),
                access.clone(),
            ),
            class_feature: use_cases::ClassFeatureUseCases::new(
                repositories.class_feature.clone(),
                repositories.class.clone(),
                access.clone(),
            ),
            subclass_feature: use_cases::SubclassFeatureUseCases::new(
                repositories.subclass_feature.clone(),
                subclass_repo,
                access.clone(),
            ),
            race: use_cases::RaceUseCases::new(
                repositories.race.clone(),
                repositories.subrace.clone(),
                source_repo.clone(),
                access.clone(),
            ),
            subrace: use_cases::SubraceUseCases::new(
                repositories.subrace.clone(),
                repositories.race.clone(),
                access.clone(),
            ),
            weapon_kind: use_cases::WeaponKindUseCases::new(
                repositories.weapon_kind.clone(),
                repositories.weapon.clone(),
                access.clone(),
            ),
            weapon_property: use_cases::WeaponPropertyUseCases::new(
                repositories.weapon_property.clone(),
                repositories.weapon.clone(),
                access.clone(),
            ),
            weapon: use_cases::WeaponUseCases::new(
                repositories.weapon.clone(),
                repositories.weapon_kind.clone(),
                repositories.weapon_property.clone(),
                source_repo,
                repositories.class.clone(),
                access.clone(),
            ),
            feat: use_cases::FeatUseCases::new(repositories.feat.clone(), access),
        };

        Self {
            repositories,
            use_cases,
        }
    }

    /// Register the seed's identifiers, then create its entries through the
    /// regular use cases. Stops at the first rejected entry.
    pub async fn seed(&self, seed: SeedFile) -> Result<SeedSummary, SeedError> {
        let repos = &self.repositories;
        let mut summary = SeedSummary::default();

        repos.users.register(seed.author);
        summary.users = seed
            .users
            .iter()
            .filter(|id| repos.users.register(**id))
            .count();
        summary.sources = seed
            .sources
            .iter()
            .filter(|id| repos.sources.register(**id))
            .count();
        summary.tools = seed
            .tools
            .iter()
            .filter(|id| repos.tools.register(**id))
            .count();
        summary.subclasses = seed
            .subclasses
            .iter()
            .filter(|id| repos.subclasses.register(**id))
            .count();

        for kind in seed.weapon_kinds {
            let entry = kind.name.clone();
            self.use_cases
                .weapon_kind
                .create
                .execute(CreateWeaponKindCommand {
                    user_id: seed.author,
                    weapon_type: kind.weapon_type,
                    name: kind.name,
                    description: kind.description,
                })
                .await
                .map_err(|source| SeedError::Rejected { entry, source })?;
            summary.weapon_kinds += 1;
        }

        for property in seed.weapon_properties {
            let entry = property.name.to_string();
            self.use_cases
                .weapon_property
                .create
                .execute(CreateWeaponPropertyCommand {
                    user_id: seed.author,
                    name: property.name,
                    description: property.description,
                    base_range: property.base_range,
                    max_range: property.max_range,
                    second_hand_dice: property.second_hand_dice,
                })
                .await
                .map_err(|source| SeedError::Rejected { entry, source })?;
            summary.weapon_properties += 1;
        }

        tracing::info!(?summary, "Seed applied");
        Ok(summary)
    }

    pub async fn summary(&self) -> Result<CatalogueSummary, UseCaseError> {
        let use_cases = &self.use_cases;
        Ok(CatalogueSummary {
            classes: use_cases.class.list.execute().await?.len(),
            races: use_cases.race.list.execute().await?.len(),
            subraces: use_cases.subrace.list.execute().await?.len(),
            weapon_kinds: use_cases.weapon_kind.list.execute().await?.len(),
            weapon_properties: use_cases.weapon_property.list.execute().await?.len(),
            weapons: use_cases.weapon.list.execute().await?.len(),
            feats: use_cases.feat.list.execute().await?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_domain::UserId;

    #[tokio::test]
    async fn configured_admins_are_known_users() {
        let admin = UserId::new();
        let config = EngineConfig {
            admin_user_ids: vec![admin],
            ..EngineConfig::default()
        };

        let app = App::in_memory(&config);
        assert!(app.repositories.users.contains(admin));
        assert!(!app.repositories.users.contains(UserId::new()));
    }

    #[tokio::test]
    async fn seed_creates_entries_and_stops_on_rejection() {
        let app = App::in_memory(&EngineConfig::default());
        let seed = SeedFile::parse(
            r#"{
                "author": "6f1c5f36-2b7e-4c49-9a59-1f0e3e1f2a10",
                "weapon_kinds": [
                    { "weapon_type": "SIMPLE_MELEE", "name": "кинжалы", "description": "Короткие клинки" }
                ],
                "weapon_properties": [
                    { "name": "LIGHT", "description": "Лёгкое" },
                    { "name": "LIGHT", "description": "Повтор" }
                ]
            }"#,
        )
        .unwrap();

        let err = app.seed(seed).await.unwrap_err();
        assert!(matches!(err, SeedError::Rejected { ref entry, .. } if entry == "LIGHT"));

        let summary = app.summary().await.unwrap();
        assert_eq!(summary.weapon_kinds, 1);
        assert_eq!(summary.weapon_properties, 1);
    }
}
