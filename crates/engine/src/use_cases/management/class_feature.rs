//! Class feature management. Feature names are unique within their class.

use std::sync::Arc;

use grimoire_domain::{ClassFeature, ClassFeatureId, ClassId, Described, Named, UserId};

use crate::infrastructure::ports::{ClassFeatureRepo, ClassRepo};
use crate::services::ClassFeatureNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "ClassFeature";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateClassFeatureCommand {
    pub user_id: UserId,
    pub class_id: ClassId,
    pub name: String,
    pub description: String,
    pub level: u8,
}

#[derive(Debug, Clone, Default)]
pub struct ClassFeatureChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub level: Patch<u8>,
}

#[derive(Debug, Clone)]
pub struct UpdateClassFeatureCommand {
    user_id: UserId,
    class_feature_id: ClassFeatureId,
    changes: ClassFeatureChanges,
}

impl UpdateClassFeatureCommand {
    pub fn new(
        user_id: UserId,
        class_feature_id: ClassFeatureId,
        changes: ClassFeatureChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.name.is_absent() && changes.description.is_absent() && changes.level.is_absent()
        {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            class_feature_id,
            changes,
        })
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateClassFeature {
    features: Arc<dyn ClassFeatureRepo>,
    classes: Arc<dyn ClassRepo>,
    names: Arc<ClassFeatureNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateClassFeature {
    pub fn new(
        features: Arc<dyn ClassFeatureRepo>,
        classes: Arc<dyn ClassRepo>,
        names: Arc<ClassFeatureNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            features,
            classes,
            names,
            access,
        }
    }

    pub async fn execute(
        &self,
        command: CreateClassFeatureCommand,
    ) -> Result<ClassFeatureId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_reference(
            self.classes.id_exists(command.class_id).await?,
            "Class",
            command.class_id,
        )?;
        ensure_name_free(
            self.names
                .can_create_with_name(command.class_id, &command.name)
                .await?,
            ENTITY,
            &command.name,
        )?;

        let feature = ClassFeature::new(
            self.features.next_id(),
            command.class_id,
            &command.name,
            &command.description,
            command.level,
        )?;
        self.features.save(&feature).await?;

        tracing::info!(
            class_feature_id = %feature.id(),
            class_id = %feature.owner_id(),
            name = %feature.name(),
            "Class feature created"
        );
        Ok(feature.id())
    }
}

pub struct UpdateClassFeature {
    features: Arc<dyn ClassFeatureRepo>,
    names: Arc<ClassFeatureNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateClassFeature {
    pub fn new(
        features: Arc<dyn ClassFeatureRepo>,
        names: Arc<ClassFeatureNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            features,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateClassFeatureCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.class_feature_id;
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
        tracing::info!(class_feature_id = %id, "Class feature updated");
        Ok(())
    }
}

pub struct DeleteClassFeature {
    features: Arc<dyn ClassFeatureRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteClassFeature {
    pub fn new(features: Arc<dyn ClassFeatureRepo>, access: Arc<AccessGuard>) -> Self {
        Self { features, access }
    }

    pub async fn execute(&self, user_id: UserId, id: ClassFeatureId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.features.id_exists(id).await?, ENTITY, id)?;
        self.features.delete(id).await?;
        tracing::info!(class_feature_id = %id, "Class feature deleted");
        Ok(())
    }
}

pub struct GetClassFeature {
    features: Arc<dyn ClassFeatureRepo>,
}

impl GetClassFeature {
    pub fn new(features: Arc<dyn ClassFeatureRepo>) -> Self {
        Self { features }
    }

    pub async fn execute(&self, id: ClassFeatureId) -> Result<ClassFeature, UseCaseError> {
        load_or_not_found(self.features.get(id).await?, ENTITY, id)
    }
}

/// Features of one class ordered by the level they unlock at, then by name.
pub struct ListClassFeatures {
    features: Arc<dyn ClassFeatureRepo>,
    classes: Arc<dyn ClassRepo>,
}

impl ListClassFeatures {
    pub fn new(features: Arc<dyn ClassFeatureRepo>, classes: Arc<dyn ClassRepo>) -> Self {
        Self { features, classes }
    }

    pub async fn execute(&self, class_id: ClassId) -> Result<Vec<ClassFeature>, UseCaseError> {
        ensure_target(self.classes.id_exists(class_id).await?, "Class", class_id)?;
        let mut features = self.features.list_for_class(class_id).await?;
        features.sort_by(|a, b| a.level().cmp(&b.level()).then_with(|| a.name().cmp(b.name())));
        Ok(features)
    }
}

/// Container for class feature use cases.
pub struct ClassFeatureUseCases {
    pub create: CreateClassFeature,
    pub update: UpdateClassFeature,
    pub delete: DeleteClassFeature,
    pub get: GetClassFeature,
    pub list: ListClassFeatures,
}

impl ClassFeatureUseCases {
    pub fn new(
        features: Arc<dyn ClassFeatureRepo>,
        classes: Arc<dyn ClassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(ClassFeatureNamePolicy::new(features.clone()));
        Self {
            create: CreateClassFeature::new(
                features.clone(),
                classes.clone(),
                names.clone(),
                access.clone(),
            ),
            update: UpdateClassFeature::new(features.clone(), names, access.clone()),
            delete: DeleteClassFeature::new(features.clone(), access),
            get: GetClassFeature::new(features.clone()),
            list: ListClassFeatures::new(features, classes),
        }
    }
}
