//! Feat management.

use std::sync::Arc;

use grimoire_domain::{Described, Feat, FeatId, Modifier, Named, RequiredModifier, UserId};

use crate::infrastructure::ports::FeatRepo;
use crate::services::FeatNamePolicy;
use crate::use_cases::access::{ensure_name_free, ensure_target, load_or_not_found, AccessGuard};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "Feat";

#[derive(Debug, Clone)]
pub struct CreateFeatCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub required_modifiers: Vec<RequiredModifier>,
    pub increase_modifiers: Vec<Modifier>,
}

#[derive(Debug, Clone, Default)]
pub struct FeatChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub required_modifiers: Patch<Vec<RequiredModifier>>,
    pub increase_modifiers: Patch<Vec<Modifier>>,
}

#[derive(Debug, Clone)]
pub struct UpdateFeatCommand {
    user_id: UserId,
    feat_id: FeatId,
    changes: FeatChanges,
}

impl UpdateFeatCommand {
    pub fn new(user_id: UserId, feat_id: FeatId, changes: FeatChanges) -> Result<Self, UseCaseError> {
        if changes.name.is_absent()
            && changes.description.is_absent()
            && changes.required_modifiers.is_absent()
            && changes.increase_modifiers.is_absent()
        {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            feat_id,
            changes,
        })
    }
}

pub struct CreateFeat {
    feats: Arc<dyn FeatRepo>,
    names: Arc<FeatNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateFeat {
    pub fn new(
        feats: Arc<dyn FeatRepo>,
        names: Arc<FeatNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            feats,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: CreateFeatCommand) -> Result<FeatId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;

        let feat = Feat::new(
            self.feats.next_id(),
            &command.name,
            &command.description,
            command.required_modifiers,
            command.increase_modifiers,
        )?;
        self.feats.save(&feat).await?;

        tracing::info!(feat_id = %feat.id(), name = %feat.name(), "Feat created");
        Ok(feat.id())
    }
}

pub struct UpdateFeat {
    feats: Arc<dyn FeatRepo>,
    names: Arc<FeatNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateFeat {
    pub fn new(
        feats: Arc<dyn FeatRepo>,
        names: Arc<FeatNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            feats,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateFeatCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.feat_id;
        let mut feat = load_or_not_found(self.feats.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(name) = changes.name {
            if name != feat.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            feat.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            feat.new_description(&description)?;
        }
        if let Patch::Present(required) = changes.required_modifiers {
            feat.new_required_modifiers(required)?;
        }
        if let Patch::Present(increase) = changes.increase_modifiers {
            feat.new_increase_modifiers(increase)?;
        }

        self.feats.save(&feat).await?;
        tracing::info!(feat_id = %id, "Feat updated");
        Ok(())
    }
}

pub struct DeleteFeat {
    feats: Arc<dyn FeatRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteFeat {
    pub fn new(feats: Arc<dyn FeatRepo>, access: Arc<AccessGuard>) -> Self {
        Self { feats, access }
    }

    pub async fn execute(&self, user_id: UserId, id: FeatId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.feats.id_exists(id).await?, ENTITY, id)?;
        self.feats.delete(id).await?;
        tracing::info!(feat_id = %id, "Feat deleted");
        Ok(())
    }
}

pub struct GetFeat {
    feats: Arc<dyn FeatRepo>,
}

impl GetFeat {
    pub fn new(feats: Arc<dyn FeatRepo>) -> Self {
        Self { feats }
    }

    pub async fn execute(&self, id: FeatId) -> Result<Feat, UseCaseError> {
        load_or_not_found(self.feats.get(id).await?, ENTITY, id)
    }
}

pub struct ListFeats {
    feats: Arc<dyn FeatRepo>,
}

impl ListFeats {
    pub fn new(feats: Arc<dyn FeatRepo>) -> Self {
        Self { feats }
    }

    pub async fn execute(&self) -> Result<Vec<Feat>, UseCaseError> {
        Ok(self.feats.list_all().await?)
    }
}

/// Container for feat use cases.
pub struct FeatUseCases {
    pub create: CreateFeat,
    pub update: UpdateFeat,
    pub delete: DeleteFeat,
    pub get: GetFeat,
    pub list: ListFeats,
}

impl FeatUseCases {
    pub fn new(feats: Arc<dyn FeatRepo>, access: Arc<AccessGuard>) -> Self {
        let names = Arc::new(FeatNamePolicy::new(feats.clone()));
        Self {
            create: CreateFeat::new(feats.clone(), names.clone(), access.clone()),
            update: UpdateFeat::new(feats.clone(), names, access.clone()),
            delete: DeleteFeat::new(feats.clone(), access),
            get: GetFeat::new(feats.clone()),
            list: ListFeats::new(feats),
        }
    }
}
