//! Race management.

use std::sync::Arc;

use grimoire_domain::{
    Age, CreatureSize, CreatureType, Described, EnglishNamed, IncreaseModifier, Named, Race,
    RaceFeature, RaceId, SourceId, Sourced, Speed, UserId,
};

use crate::infrastructure::ports::{RaceRepo, SourceRepo, SubraceRepo};
use crate::services::RaceNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "Race";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateRaceCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub creature_type: CreatureType,
    pub creature_size: CreatureSize,
    pub speed: Speed,
    pub age: Age,
    pub increase_modifiers: Vec<IncreaseModifier>,
    pub features: Vec<RaceFeature>,
    pub name_in_english: String,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct RaceChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub creature_type: Patch<CreatureType>,
    pub creature_size: Patch<CreatureSize>,
    pub speed: Patch<Speed>,
    pub age: Patch<Age>,
    pub increase_modifiers: Patch<Vec<IncreaseModifier>>,
    pub features: Patch<Vec<RaceFeature>>,
    pub name_in_english: Patch<String>,
    pub source_id: Patch<SourceId>,
}

impl RaceChanges {
    fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.description.is_absent()
            && self.creature_type.is_absent()
            && self.creature_size.is_absent()
            && self.speed.is_absent()
            && self.age.is_absent()
            && self.increase_modifiers.is_absent()
            && self.features.is_absent()
            && self.name_in_english.is_absent()
            && self.source_id.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRaceCommand {
    user_id: UserId,
    race_id: RaceId,
    changes: RaceChanges,
}

impl UpdateRaceCommand {
    pub fn new(user_id: UserId, race_id: RaceId, changes: RaceChanges) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            race_id,
            changes,
        })
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateRace {
    races: Arc<dyn RaceRepo>,
    sources: Arc<dyn SourceRepo>,
    names: Arc<RaceNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateRace {
    pub fn new(
        races: Arc<dyn RaceRepo>,
        sources: Arc<dyn SourceRepo>,
        names: Arc<RaceNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            races,
            sources,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: CreateRaceCommand) -> Result<RaceId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;
        ensure_reference(
            self.sources.id_exists(command.source_id).await?,
            "Source",
            command.source_id,
        )?;

        let race = Race::new(
            self.races.next_id(),
            &command.name,
            &command.description,
            command.creature_type,
            command.creature_size,
            command.speed,
            command.age,
            command.increase_modifiers,
            command.features,
            &command.name_in_english,
            command.source_id,
        )?;
        self.races.save(&race).await?;

        tracing::info!(race_id = %race.id(), name = %race.name(), "Race created");
        Ok(race.id())
    }
}

pub struct UpdateRace {
    races: Arc<dyn RaceRepo>,
    sources: Arc<dyn SourceRepo>,
    names: Arc<RaceNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateRace {
    pub fn new(
        races: Arc<dyn RaceRepo>,
        sources: Arc<dyn SourceRepo>,
        names: Arc<RaceNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            races,
            sources,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateRaceCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.race_id;
        let mut race = load_or_not_found(self.races.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(name) = changes.name {
            if name != race.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            race.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            race.new_description(&description)?;
        }
        if let Patch::Present(creature_type) = changes.creature_type {
            race.new_creature_type(creature_type)?;
        }
        if let Patch::Present(creature_size) = changes.creature_size {
            race.new_creature_size(creature_size)?;
        }
        if let Patch::Present(speed) = changes.speed {
            race.new_speed(speed)?;
        }
        if let Patch::Present(age) = changes.age {
            race.new_age(age)?;
        }
        if let Patch::Present(modifiers) = changes.increase_modifiers {
            race.new_increase_modifiers(modifiers)?;
        }
        if let Patch::Present(features) = changes.features {
            race.new_features(features)?;
        }
        if let Patch::Present(name_in_english) = changes.name_in_english {
            race.new_name_in_english(&name_in_english)?;
        }
        if let Patch::Present(source_id) = changes.source_id {
            ensure_reference(self.sources.id_exists(source_id).await?, "Source", source_id)?;
            race.new_source_id(source_id)?;
        }

        self.races.save(&race).await?;
        tracing::info!(race_id = %id, "Race updated");
        Ok(())
    }
}

/// Deletes a race that no subrace refers to.
pub struct DeleteRace {
    races: Arc<dyn RaceRepo>,
    subraces: Arc<dyn SubraceRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteRace {
    pub fn new(
        races: Arc<dyn RaceRepo>,
        subraces: Arc<dyn SubraceRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            races,
            subraces,
            access,
        }
    }

    pub async fn execute(&self, user_id: UserId, id: RaceId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.races.id_exists(id).await?, ENTITY, id)?;
        if self.subraces.race_in_use(id).await? {
            tracing::debug!(race_id = %id, "Race still has subraces");
            return Err(UseCaseError::invalid_data(format!(
                "Race {} still has subraces",
                id
            )));
        }

        self.races.delete(id).await?;
        tracing::info!(race_id = %id, "Race deleted");
        Ok(())
    }
}

pub struct GetRace {
    races: Arc<dyn RaceRepo>,
}

impl GetRace {
    pub fn new(races: Arc<dyn RaceRepo>) -> Self {
        Self { races }
    }

    pub async fn execute(&self, id: RaceId) -> Result<Race, UseCaseError> {
        load_or_not_found(self.races.get(id).await?, ENTITY, id)
    }
}

pub struct ListRaces {
    races: Arc<dyn RaceRepo>,
}

impl ListRaces {
    pub fn new(races: Arc<dyn RaceRepo>) -> Self {
        Self { races }
    }

    pub async fn execute(&self) -> Result<Vec<Race>, UseCaseError> {
        Ok(self.races.list_all().await?)
    }
}

/// Container for race use cases.
pub struct RaceUseCases {
    pub create: CreateRace,
    pub update: UpdateRace,
    pub delete: DeleteRace,
    pub get: GetRace,
    pub list: ListRaces,
}

impl RaceUseCases {
    pub fn new(
        races: Arc<dyn RaceRepo>,
        subraces: Arc<dyn SubraceRepo>,
        sources: Arc<dyn SourceRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(RaceNamePolicy::new(races.clone()));
        Self {
            create: CreateRace::new(races.clone(), sources.clone(), names.clone(), access.clone()),
            update: UpdateRace::new(races.clone(), sources, names, access.clone()),
            delete: DeleteRace::new(races.clone(), subraces, access),
            get: GetRace::new(races.clone()),
            list: ListRaces::new(races),
        }
    }
}
