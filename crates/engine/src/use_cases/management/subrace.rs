//! Subrace management.
//!
//! Features can be replaced wholesale with `new_features` or edited in place
//! with `add_features` and `remove_features`, never both in one command.

use std::collections::HashSet;
use std::sync::Arc;

use grimoire_domain::{
    Described, EnglishNamed, IncreaseModifier, Named, RaceFeature, RaceId, Subrace, SubraceId,
    UserId,
};

use crate::infrastructure::ports::{RaceRepo, SubraceRepo};
use crate::services::SubraceNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "Subrace";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateSubraceCommand {
    pub user_id: UserId,
    pub race_id: RaceId,
    pub name: String,
    pub description: String,
    pub increase_modifiers: Vec<IncreaseModifier>,
    pub features: Vec<RaceFeature>,
    pub name_in_english: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubraceChanges {
    pub race_id: Patch<RaceId>,
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub increase_modifiers: Patch<Vec<IncreaseModifier>>,
    pub new_features: Patch<Vec<RaceFeature>>,
    pub add_features: Patch<Vec<RaceFeature>>,
    pub remove_features: Patch<Vec<String>>,
    pub name_in_english: Patch<String>,
}

impl SubraceChanges {
    fn is_empty(&self) -> bool {
        self.race_id.is_absent()
            && self.name.is_absent()
            && self.description.is_absent()
            && self.increase_modifiers.is_absent()
            && self.new_features.is_absent()
            && self.add_features.is_absent()
            && self.remove_features.is_absent()
            && self.name_in_english.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubraceCommand {
    user_id: UserId,
    subrace_id: SubraceId,
    changes: SubraceChanges,
}

impl UpdateSubraceCommand {
    /// # Errors
    ///
    /// `InvalidData` if nothing is supplied, if `new_features` is combined
    /// with `add_features` or `remove_features`, or if a feature name is both
    /// added and removed.
    pub fn new(
        user_id: UserId,
        subrace_id: SubraceId,
        changes: SubraceChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }

        let edits_in_place = changes.add_features.is_present() || changes.remove_features.is_present();
        if changes.new_features.is_present() && edits_in_place {
            return Err(UseCaseError::invalid_data(
                "new_features cannot be combined with add_features or remove_features",
            ));
        }

        if let (Patch::Present(added), Patch::Present(removed)) =
            (&changes.add_features, &changes.remove_features)
        {
            let removed: HashSet<&str> = removed.iter().map(String::as_str).collect();
            if let Some(both) = added.iter().find(|f| removed.contains(f.name())) {
                return Err(UseCaseError::invalid_data(format!(
                    "Feature '{}' is both added and removed",
                    both.name()
                )));
            }
        }

        Ok(Self {
            user_id,
            subrace_id,
            changes,
        })
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateSubrace {
    subraces: Arc<dyn SubraceRepo>,
    races: Arc<dyn RaceRepo>,
    names: Arc<SubraceNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateSubrace {
    pub fn new(
        subraces: Arc<dyn SubraceRepo>,
        races: Arc<dyn RaceRepo>,
        names: Arc<SubraceNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            subraces,
            races,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: CreateSubraceCommand) -> Result<SubraceId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;
        ensure_reference(
            self.races.id_exists(command.race_id).await?,
            "Race",
            command.race_id,
        )?;

        let subrace = Subrace::new(
            self.subraces.next_id(),
            command.race_id,
            &command.name,
            &command.description,
            command.increase_modifiers,
            command.features,
            &command.name_in_english,
        )?;
        self.subraces.save(&subrace).await?;

        tracing::info!(
            subrace_id = %subrace.id(),
            race_id = %subrace.race_id(),
            name = %subrace.name(),
            "Subrace created"
        );
        Ok(subrace.id())
    }
}

pub struct UpdateSubrace {
    subraces: Arc<dyn SubraceRepo>,
    races: Arc<dyn RaceRepo>,
    names: Arc<SubraceNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateSubrace {
    pub fn new(
        subraces: Arc<dyn SubraceRepo>,
        races: Arc<dyn RaceRepo>,
        names: Arc<SubraceNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            subraces,
            races,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateSubraceCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.subrace_id;
        let mut subrace = load_or_not_found(self.subraces.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(race_id) = changes.race_id {
            ensure_reference(self.races.id_exists(race_id).await?, "Race", race_id)?;
            subrace.new_race_id(race_id)?;
        }
        if let Patch::Present(name) = changes.name {
            if name != subrace.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            subrace.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            subrace.new_description(&description)?;
        }
        if let Patch::Present(modifiers) = changes.increase_modifiers {
            subrace.new_increase_modifiers(modifiers)?;
        }
        if let Patch::Present(features) = changes.new_features {
            subrace.new_features(features)?;
        }
        if let Patch::Present(names) = changes.remove_features {
            subrace.remove_features(&names)?;
        }
        if let Patch::Present(features) = changes.add_features {
            subrace.add_features(features)?;
        }
        if let Patch::Present(name_in_english) = changes.name_in_english {
            subrace.new_name_in_english(&name_in_english)?;
        }

        self.subraces.save(&subrace).await?;
        tracing::info!(subrace_id = %id, "Subrace updated");
        Ok(())
    }
}

pub struct DeleteSubrace {
    subraces: Arc<dyn SubraceRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteSubrace {
    pub fn new(subraces: Arc<dyn SubraceRepo>, access: Arc<AccessGuard>) -> Self {
        Self { subraces, access }
    }

    pub async fn execute(&self, user_id: UserId, id: SubraceId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.subraces.id_exists(id).await?, ENTITY, id)?;
        self.subraces.delete(id).await?;
        tracing::info!(subrace_id = %id, "Subrace deleted");
        Ok(())
    }
}

pub struct GetSubrace {
    subraces: Arc<dyn SubraceRepo>,
}

impl GetSubrace {
    pub fn new(subraces: Arc<dyn SubraceRepo>) -> Self {
        Self { subraces }
    }

    pub async fn execute(&self, id: SubraceId) -> Result<Subrace, UseCaseError> {
        load_or_not_found(self.subraces.get(id).await?, ENTITY, id)
    }
}

pub struct ListSubraces {
    subraces: Arc<dyn SubraceRepo>,
}

impl ListSubraces {
    pub fn new(subraces: Arc<dyn SubraceRepo>) -> Self {
        Self { subraces }
    }

    pub async fn execute(&self) -> Result<Vec<Subrace>, UseCaseError> {
        Ok(self.subraces.list_all().await?)
    }
}

/// Container for subrace use cases.
pub struct SubraceUseCases {
    pub create: CreateSubrace,
    pub update: UpdateSubrace,
    pub delete: DeleteSubrace,
    pub get: GetSubrace,
    pub list: ListSubraces,
}

impl SubraceUseCases {
    pub fn new(
        subraces: Arc<dyn SubraceRepo>,
        races: Arc<dyn RaceRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(SubraceNamePolicy::new(subraces.clone()));
        Self {
            create: CreateSubrace::new(
                subraces.clone(),
                races.clone(),
                names.clone(),
                access.clone(),
            ),
            update: UpdateSubrace::new(subraces.clone(), races, names, access.clone()),
            delete: DeleteSubrace::new(subraces.clone(), access),
            get: GetSubrace::new(subraces.clone()),
            list: ListSubraces::new(subraces),
        }
    }
}
