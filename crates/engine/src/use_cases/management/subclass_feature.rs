//! Subclass feature management. Feature names are unique within their
//! subclass.

use std::sync::Arc;

use grimoire_domain::{Described, Named, SubclassFeature, SubclassFeatureId, SubclassId, UserId};

use crate::infrastructure::ports::{SubclassFeatureRepo, SubclassRepo};
use crate::services::SubclassFeatureNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "SubclassFeature";

#[derive(Debug, Clone)]
pub struct CreateSubclassFeatureCommand {
    pub user_id: UserId,
    pub subclass_id: SubclassId,
    pub name: String,
    pub description: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default)]
pub struct SubclassFeatureChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub level: Patch<u8>,
}

#[derive(Debug, Clone)]
pub struct UpdateSubclassFeatureCommand {
    user_id: UserId,
    subclass_feature_id: SubclassFeatureId,
    changes: SubclassFeatureChanges,
}

impl UpdateSubclassFeatureCommand {
    pub fn new(
        user_id: UserId,
        subclass_feature_id: SubclassFeatureId,
        changes: SubclassFeatureChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.name.is_absent() && changes.description.is_absent() && changes.level.is_absent()
        {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            subclass_feature_id,
            changes,
        })
    }
}

pub struct CreateSubclassFeature {
    features: Arc<dyn SubclassFeatureRepo>,
    subclasses: Arc<dyn SubclassRepo>,
    names: Arc<SubclassFeatureNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateSubclassFeature {
    pub fn new(
        features: Arc<dyn SubclassFeatureRepo>,
        subclasses: Arc<dyn SubclassRepo>,
        names: Arc<SubclassFeatureNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            features,
            subclasses,
            names,
            access,
        }
    }

    pub async fn execute(
        &self,
        command: CreateSubclassFeatureCommand,
    ) -> Result<SubclassFeatureId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_reference(
            self.subclasses.id_exists(command.subclass_id).await?,
            "Subclass",
            command.subclass_id,
        )?;
        ensure_name_free(
            self.names
                .can_create_with_name(command.subclass_id, &command.name)
                .await?,
            ENTITY,
            &command.name,
        )?;

        let feature = SubclassFeature::new(
            self.features.next_id(),
            command.subclass_id,
            &command.name,
            &command.description,
            command.level,
        )?;
        self.features.save(&feature).await?;

        tracing::info!(
            subclass_feature_id = %feature.id(),
            subclass_id = %feature.owner_id(),
            name = %feature.name(),
            "Subclass feature created"
        );
        Ok(feature.id())
    }
}

pub struct UpdateSubclassFeature {
    features: Arc<dyn SubclassFeatureRepo>,
    names: Arc<SubclassFeatureNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateSubclassFeature {
    pub fn new(
        features: Arc<dyn SubclassFeatureRepo>,
        names: Arc<SubclassFeatureNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            features,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateSubclassFeatureCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.subclass_feature_id;
        let mut feature = load_or_not_found(self.features.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(name) = changes.name {
            if name != feature.name() {
                ensure_name_free(
                    self.names
                        .can_rename_with_name(feature.owner_id(), &name)
                        .await?,
                    ENTITY,
                    &name,
                )?;
            }
            feature.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            feature.new_description(&description)?;
        }
        if let Patch::Present(level) = changes.level {
            feature.new_level(level)?;
        }

        self.features.save(&feature).await?;
        tracing::info!(subclass_feature_id = %id, "Subclass feature updated");
        Ok(())
    }
}

pub struct DeleteSubclassFeature {
    features: Arc<dyn SubclassFeatureRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteSubclassFeature {
    pub fn new(features: Arc<dyn SubclassFeatureRepo>, access: Arc<AccessGuard>) -> Self {
        Self { features, access }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        id: SubclassFeatureId,
    ) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.features.id_exists(id).await?, ENTITY, id)?;
        self.features.delete(id).await?;
        tracing::info!(subclass_feature_id = %id, "Subclass feature deleted");
        Ok(())
    }
}

pub struct GetSubclassFeature {
    features: Arc<dyn SubclassFeatureRepo>,
}

impl GetSubclassFeature {
    pub fn new(features: Arc<dyn SubclassFeatureRepo>) -> Self {
        Self { features }
    }

    pub async fn execute(&self, id: SubclassFeatureId) -> Result<SubclassFeature, UseCaseError> {
        load_or_not_found(self.features.get(id).await?, ENTITY, id)
    }
}

pub struct ListSubclassFeatures {
    features: Arc<dyn SubclassFeatureRepo>,
    subclasses: Arc<dyn SubclassRepo>,
}

impl ListSubclassFeatures {
    pub fn new(features: Arc<dyn SubclassFeatureRepo>, subclasses: Arc<dyn SubclassRepo>) -> Self {
        Self {
            features,
            subclasses,
        }
    }

    pub async fn execute(
        &self,
        subclass_id: SubclassId,
    ) -> Result<Vec<SubclassFeature>, UseCaseError> {
        ensure_target(
            self.subclasses.id_exists(subclass_id).await?,
            "Subclass",
            subclass_id,
        )?;
        let mut features = self.features.list_for_subclass(subclass_id).await?;
        features.sort_by(|a, b| a.level().cmp(&b.level()).then_with(|| a.name().cmp(b.name())));
        Ok(features)
    }
}

/// Container for subclass feature use cases.
pub struct SubclassFeatureUseCases {
    pub create: CreateSubclassFeature,
    pub update: UpdateSubclassFeature,
    pub delete: DeleteSubclassFeature,
    pub get: GetSubclassFeature,
    pub list: ListSubclassFeatures,
}

impl SubclassFeatureUseCases {
    pub fn new(
        features: Arc<dyn SubclassFeatureRepo>,
        subclasses: Arc<dyn SubclassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(SubclassFeatureNamePolicy::new(features.clone()));
        Self {
            create: CreateSubclassFeature::new(
                features.clone(),
                subclasses.clone(),
                names.clone(),
                access.clone(),
            ),
            update: UpdateSubclassFeature::new(features.clone(), names, access.clone()),
            delete: DeleteSubclassFeature::new(features.clone(), access),
            get: GetSubclassFeature::new(features.clone()),
            list: ListSubclassFeatures::new(features, subclasses),
        }
    }
}
