//! Character class management.

use std::sync::Arc;

use grimoire_domain::{
    CharacterClass, ClassHits, ClassId, ClassProficiencies, Described, EnglishNamed, Modifier,
    Named, SourceId, Sourced, UserId,
};

use crate::infrastructure::ports::{
    ClassFeatureRepo, ClassLevelRepo, ClassRepo, SourceRepo, ToolRepo, WeaponRepo,
};
use crate::services::ClassNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "Class";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateClassCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub primary_modifiers: Vec<Modifier>,
    pub hits: ClassHits,
    pub proficiencies: ClassProficiencies,
    pub name_in_english: String,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct ClassChanges {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub primary_modifiers: Patch<Vec<Modifier>>,
    pub hits: Patch<ClassHits>,
    pub proficiencies: Patch<ClassProficiencies>,
    pub name_in_english: Patch<String>,
    pub source_id: Patch<SourceId>,
}

impl ClassChanges {
    fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.description.is_absent()
            && self.primary_modifiers.is_absent()
            && self.hits.is_absent()
            && self.proficiencies.is_absent()
            && self.name_in_english.is_absent()
            && self.source_id.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClassCommand {
    user_id: UserId,
    class_id: ClassId,
    changes: ClassChanges,
}

impl UpdateClassCommand {
    /// # Errors
    ///
    /// `InvalidData` if nothing is supplied or `primary_modifiers` is an
    /// empty list.
    pub fn new(
        user_id: UserId,
        class_id: ClassId,
        changes: ClassChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        if let Patch::Present(modifiers) = &changes.primary_modifiers {
            if modifiers.is_empty() {
                return Err(UseCaseError::invalid_data(
                    "Primary modifiers must contain at least one modifier",
                ));
            }
        }
        Ok(Self {
            user_id,
            class_id,
            changes,
        })
    }
}

// =============================================================================
// Reference checks
// =============================================================================

/// Existence checks for the weapons, tools and source a class refers to.
pub struct ClassReferences {
    weapons: Arc<dyn WeaponRepo>,
    tools: Arc<dyn ToolRepo>,
    sources: Arc<dyn SourceRepo>,
}

impl ClassReferences {
    pub fn new(
        weapons: Arc<dyn WeaponRepo>,
        tools: Arc<dyn ToolRepo>,
        sources: Arc<dyn SourceRepo>,
    ) -> Self {
        Self {
            weapons,
            tools,
            sources,
        }
    }

    async fn check_proficiencies(
        &self,
        proficiencies: &ClassProficiencies,
    ) -> Result<(), UseCaseError> {
        for id in proficiencies.weapons() {
            ensure_reference(self.weapons.id_exists(*id).await?, "Weapon", id)?;
        }
        for id in proficiencies.tools() {
            ensure_reference(self.tools.id_exists(*id).await?, "Tool", id)?;
        }
        Ok(())
    }

    async fn check_source(&self, id: SourceId) -> Result<(), UseCaseError> {
        ensure_reference(self.sources.id_exists(id).await?, "Source", id)
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateClass {
    classes: Arc<dyn ClassRepo>,
    names: Arc<ClassNamePolicy>,
    references: Arc<ClassReferences>,
    access: Arc<AccessGuard>,
}

impl CreateClass {
    pub fn new(
        classes: Arc<dyn ClassRepo>,
        names: Arc<ClassNamePolicy>,
        references: Arc<ClassReferences>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            classes,
            names,
            references,
            access,
        }
    }

    pub async fn execute(&self, command: CreateClassCommand) -> Result<ClassId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;
        self.references
            .check_proficiencies(&command.proficiencies)
            .await?;
        self.references.check_source(command.source_id).await?;

        let class = CharacterClass::new(
            self.classes.next_id(),
            &command.name,
            &command.description,
            command.primary_modifiers,
            command.hits,
            command.proficiencies,
            &command.name_in_english,
            command.source_id,
        )?;
        self.classes.save(&class).await?;

        tracing::info!(class_id = %class.id(), name = %class.name(), "Class created");
        Ok(class.id())
    }
}

pub struct UpdateClass {
    classes: Arc<dyn ClassRepo>,
    names: Arc<ClassNamePolicy>,
    references: Arc<ClassReferences>,
    access: Arc<AccessGuard>,
}

impl UpdateClass {
    pub fn new(
        classes: Arc<dyn ClassRepo>,
        names: Arc<ClassNamePolicy>,
        references: Arc<ClassReferences>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            classes,
            names,
            references,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateClassCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.class_id;
        let mut class = load_or_not_found(self.classes.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(name) = changes.name {
            if name != class.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            class.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            class.new_description(&description)?;
        }
        if let Patch::Present(modifiers) = changes.primary_modifiers {
            class.new_primary_modifiers(modifiers)?;
        }
        if let Patch::Present(hits) = changes.hits {
            class.new_hits(hits)?;
        }
        if let Patch::Present(proficiencies) = changes.proficiencies {
            self.references.check_proficiencies(&proficiencies).await?;
            class.new_proficiencies(proficiencies)?;
        }
        if let Patch::Present(name_in_english) = changes.name_in_english {
            class.new_name_in_english(&name_in_english)?;
        }
        if let Patch::Present(source_id) = changes.source_id {
            self.references.check_source(source_id).await?;
            class.new_source_id(source_id)?;
        }

        self.classes.save(&class).await?;
        tracing::info!(class_id = %id, "Class updated");
        Ok(())
    }
}

/// Deletes a class that has no levels or features left.
pub struct DeleteClass {
    classes: Arc<dyn ClassRepo>,
    levels: Arc<dyn ClassLevelRepo>,
    features: Arc<dyn ClassFeatureRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteClass {
    pub fn new(
        classes: Arc<dyn ClassRepo>,
        levels: Arc<dyn ClassLevelRepo>,
        features: Arc<dyn ClassFeatureRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            classes,
            levels,
            features,
            access,
        }
    }

    pub async fn execute(&self, user_id: UserId, id: ClassId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.classes.id_exists(id).await?, ENTITY, id)?;

        let has_levels = !self.levels.list_for_class(id).await?.is_empty();
        let has_features = !self.features.list_for_class(id).await?.is_empty();
        if has_levels || has_features {
            tracing::debug!(class_id = %id, has_levels, has_features, "Class still has dependents");
            return Err(UseCaseError::invalid_data(format!(
                "Class {} still has levels or features",
                id
            )));
        }

        self.classes.delete(id).await?;
        tracing::info!(class_id = %id, "Class deleted");
        Ok(())
    }
}

pub struct GetClass {
    classes: Arc<dyn ClassRepo>,
}

impl GetClass {
    pub fn new(classes: Arc<dyn ClassRepo>) -> Self {
        Self { classes }
    }

    pub async fn execute(&self, id: ClassId) -> Result<CharacterClass, UseCaseError> {
        load_or_not_found(self.classes.get(id).await?, ENTITY, id)
    }
}

pub struct ListClasses {
    classes: Arc<dyn ClassRepo>,
}

impl ListClasses {
    pub fn new(classes: Arc<dyn ClassRepo>) -> Self {
        Self { classes }
    }

    pub async fn execute(&self) -> Result<Vec<CharacterClass>, UseCaseError> {
        Ok(self.classes.list_all().await?)
    }
}

/// Container for class use cases.
pub struct ClassUseCases {
    pub create: CreateClass,
    pub update: UpdateClass,
    pub delete: DeleteClass,
    pub get: GetClass,
    pub list: ListClasses,
}

impl ClassUseCases {
    pub fn new(
        classes: Arc<dyn ClassRepo>,
        levels: Arc<dyn ClassLevelRepo>,
        features: Arc<dyn ClassFeatureRepo>,
        weapons: Arc<dyn WeaponRepo>,
        tools: Arc<dyn ToolRepo>,
        sources: Arc<dyn SourceRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(ClassNamePolicy::new(classes.clone()));
        let references = Arc::new(ClassReferences::new(weapons, tools, sources));
        Self {
            create: CreateClass::new(
                classes.clone(),
                names.clone(),
                references.clone(),
                access.clone(),
            ),
            update: UpdateClass::new(classes.clone(), names, references, access.clone()),
            delete: DeleteClass::new(classes.clone(), levels, features, access),
            get: GetClass::new(classes.clone()),
            list: ListClasses::new(classes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_domain::{ClassFeature, ClassFeatureId, Dice, DiceType, ToolId, WeaponId};

    use crate::infrastructure::ports::{
        MockClassFeatureRepo, MockClassLevelRepo, MockClassRepo, MockSourceRepo, MockToolRepo,
        MockUserRepo, MockWeaponRepo,
    };
    use crate::use_cases::ErrorStatus;

    fn allow_all_users() -> Arc<AccessGuard> {
        let mut users = MockUserRepo::new();
        users.expect_id_exists().returning(|_| Ok(true));
        Arc::new(AccessGuard::new(Arc::new(users)))
    }

    fn bard_hits() -> ClassHits {
        ClassHits::new(
            Dice::new(1, DiceType::D8).unwrap(),
            8,
            Modifier::Constitution,
            5,
        )
        .unwrap()
    }

    fn bard(id: ClassId) -> CharacterClass {
        CharacterClass::new(
            id,
            "бард",
            "Мастер песни",
            vec![Modifier::Charisma],
            bard_hits(),
            ClassProficiencies::none(),
            "Bard",
            SourceId::new(),
        )
        .unwrap()
    }

    struct Mocks {
        classes: MockClassRepo,
        levels: MockClassLevelRepo,
        features: MockClassFeatureRepo,
        tools: MockToolRepo,
        sources: MockSourceRepo,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                classes: MockClassRepo::new(),
                levels: MockClassLevelRepo::new(),
                features: MockClassFeatureRepo::new(),
                tools: MockToolRepo::new(),
                sources: MockSourceRepo::new(),
            }
        }

        fn build(self) -> ClassUseCases {
            ClassUseCases::new(
                Arc::new(self.classes),
                Arc::new(self.levels),
                Arc::new(self.features),
                Arc::new(MockWeaponRepo::new()),
                Arc::new(self.tools),
                Arc::new(self.sources),
                allow_all_users(),
            )
        }
    }

    #[test]
    fn update_command_rejects_empty_primary_modifiers() {
        let err = UpdateClassCommand::new(
            UserId::new(),
            ClassId::new(),
            ClassChanges {
                primary_modifiers: Patch::Present(vec![]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn create_rejects_unknown_tool() {
        let mut mocks = Mocks::new();
        mocks.classes.expect_name_exists().returning(|_| Ok(false));
        mocks.classes.expect_save().never();
        mocks.tools.expect_id_exists().returning(|_| Ok(false));

        let proficiencies =
            ClassProficiencies::new(vec![], vec![], vec![ToolId::new()], vec![], vec![], 0, 1)
                .unwrap();
        let err = mocks
            .build()
            .create
            .execute(CreateClassCommand {
                user_id: UserId::new(),
                name: "бард".into(),
                description: "Мастер песни".into(),
                primary_modifiers: vec![Modifier::Charisma],
                hits: bard_hits(),
                proficiencies,
                name_in_english: "Bard".into(),
                source_id: SourceId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn update_built_directly_rejects_missing_weapon() {
        let id = ClassId::new();
        let mut classes = MockClassRepo::new();
        classes.expect_get().returning(move |_| Ok(Some(bard(id))));
        classes.expect_save().never();
        let mut weapons = MockWeaponRepo::new();
        weapons.expect_id_exists().returning(|_| Ok(false));
        let classes: Arc<dyn ClassRepo> = Arc::new(classes);

        let update = UpdateClass::new(
            classes.clone(),
            Arc::new(ClassNamePolicy::new(classes)),
            Arc::new(ClassReferences::new(
                Arc::new(weapons),
                Arc::new(MockToolRepo::new()),
                Arc::new(MockSourceRepo::new()),
            )),
            allow_all_users(),
        );
        let proficiencies =
            ClassProficiencies::new(vec![], vec![WeaponId::new()], vec![], vec![], vec![], 0, 0)
                .unwrap();
        let command = UpdateClassCommand::new(
            UserId::new(),
            id,
            ClassChanges {
                proficiencies: Patch::Present(proficiencies),
                ..Default::default()
            },
        )
        .unwrap();

        let err = update.execute(command).await.unwrap_err();
        assert_eq!(err.status(), ErrorStatus::InvalidData);
        assert!(err.to_string().contains("Weapon"));
    }

    #[tokio::test]
    async fn rename_to_current_name_is_idempotent_not_taken() {
        let id = ClassId::new();
        let mut mocks = Mocks::new();
        mocks
            .classes
            .expect_get()
            .returning(move |_| Ok(Some(bard(id))));
        mocks.classes.expect_name_exists().never();
        mocks.classes.expect_save().never();

        let command = UpdateClassCommand::new(
            UserId::new(),
            id,
            ClassChanges {
                name: Patch::Present("бард".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let err = mocks.build().update.execute(command).await.unwrap_err();

        assert_eq!(err.status(), ErrorStatus::Idempotent);
    }

    #[tokio::test]
    async fn update_saves_whole_class_once() {
        let id = ClassId::new();
        let source = SourceId::new();
        let mut mocks = Mocks::new();
        mocks
            .classes
            .expect_get()
            .returning(move |_| Ok(Some(bard(id))));
        mocks.classes.expect_name_exists().returning(|_| Ok(false));
        mocks.sources.expect_id_exists().returning(|_| Ok(true));
        mocks
            .classes
            .expect_save()
            .withf(move |c| {
                c.name() == "скальд"
                    && c.source_id() == source
                    && c.primary_modifiers() == [Modifier::Charisma, Modifier::Wisdom]
            })
            .times(1)
            .returning(|_| Ok(()));

        let command = UpdateClassCommand::new(
            UserId::new(),
            id,
            ClassChanges {
                name: Patch::Present("скальд".into()),
                primary_modifiers: Patch::Present(vec![Modifier::Charisma, Modifier::Wisdom]),
                source_id: Patch::Present(source),
                ..Default::default()
            },
        )
        .unwrap();

        mocks.build().update.execute(command).await.unwrap();
    }

    #[tokio::test]
    async fn delete_refuses_class_with_features() {
        let id = ClassId::new();
        let mut mocks = Mocks::new();
        mocks.classes.expect_id_exists().returning(|_| Ok(true));
        mocks.classes.expect_delete().never();
        mocks.levels.expect_list_for_class().returning(|_| Ok(vec![]));
        mocks.features.expect_list_for_class().returning(move |class_id| {
            Ok(vec![ClassFeature::new(
                ClassFeatureId::new(),
                class_id,
                "Вдохновение",
                "Кость",
                1,
            )
            .unwrap()])
        });

        let err = mocks
            .build()
            .delete
            .execute(UserId::new(), id)
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn get_missing_class_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.classes.expect_get().returning(|_| Ok(None));

        let err = mocks.build().get.execute(ClassId::new()).await.unwrap_err();
        assert_eq!(err.status(), ErrorStatus::NotFound);
    }
}
