//! Class level management.
//!
//! The dice, points and bonus damage patches carry the value together with
//! its description; supplying only one half is rejected by the aggregate.

use std::sync::Arc;

use grimoire_domain::{ClassId, ClassLevel, ClassLevelId, Dice, UserId};

use crate::infrastructure::ports::{ClassLevelRepo, ClassRepo};
use crate::use_cases::access::{ensure_reference, ensure_target, load_or_not_found, AccessGuard};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "ClassLevel";

/// A value together with the text describing it. Both halves absent clears
/// the field.
pub type AnnotatedPatch<T> = Patch<(Option<T>, Option<String>)>;

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateClassLevelCommand {
    pub user_id: UserId,
    pub class_id: ClassId,
    pub level: u8,
    pub proficiency_bonus: u8,
    pub dice: Option<Dice>,
    pub dice_description: Option<String>,
    pub points: Option<u16>,
    pub points_description: Option<String>,
    pub bonus_damage: Option<u16>,
    pub bonus_damage_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClassLevelChanges {
    pub level: Patch<u8>,
    pub proficiency_bonus: Patch<u8>,
    pub dice: AnnotatedPatch<Dice>,
    pub points: AnnotatedPatch<u16>,
    pub bonus_damage: AnnotatedPatch<u16>,
}

impl ClassLevelChanges {
    fn is_empty(&self) -> bool {
        self.level.is_absent()
            && self.proficiency_bonus.is_absent()
            && self.dice.is_absent()
            && self.points.is_absent()
            && self.bonus_damage.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateClassLevelCommand {
    user_id: UserId,
    class_level_id: ClassLevelId,
    changes: ClassLevelChanges,
}

impl UpdateClassLevelCommand {
    pub fn new(
        user_id: UserId,
        class_level_id: ClassLevelId,
        changes: ClassLevelChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            class_level_id,
            changes,
        })
    }
}

fn level_taken(class_id: ClassId, level: u8) -> UseCaseError {
    tracing::debug!(class_id = %class_id, level, "Rejected duplicate class level");
    UseCaseError::invalid_data(format!("Class {} already has level {}", class_id, level))
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateClassLevel {
    levels: Arc<dyn ClassLevelRepo>,
    classes: Arc<dyn ClassRepo>,
    access: Arc<AccessGuard>,
}

impl CreateClassLevel {
    pub fn new(
        levels: Arc<dyn ClassLevelRepo>,
        classes: Arc<dyn ClassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            levels,
            classes,
            access,
        }
    }

    pub async fn execute(
        &self,
        command: CreateClassLevelCommand,
    ) -> Result<ClassLevelId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_reference(
            self.classes.id_exists(command.class_id).await?,
            "Class",
            command.class_id,
        )?;
        if self
            .levels
            .level_exists(command.class_id, command.level)
            .await?
        {
            return Err(level_taken(command.class_id, command.level));
        }

        let level = ClassLevel::new(
            self.levels.next_id(),
            command.class_id,
            command.level,
            command.proficiency_bonus,
            command.dice,
            command.dice_description.as_deref(),
            command.points,
            command.points_description.as_deref(),
            command.bonus_damage,
            command.bonus_damage_description.as_deref(),
        )?;
        self.levels.save(&level).await?;

        tracing::info!(
            class_level_id = %level.id(),
            class_id = %level.class_id(),
            level = level.level().value(),
            "Class level created"
        );
        Ok(level.id())
    }
}

pub struct UpdateClassLevel {
    levels: Arc<dyn ClassLevelRepo>,
    access: Arc<AccessGuard>,
}

impl UpdateClassLevel {
    pub fn new(levels: Arc<dyn ClassLevelRepo>, access: Arc<AccessGuard>) -> Self {
        Self { levels, access }
    }

    pub async fn execute(&self, command: UpdateClassLevelCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.class_level_id;
        let mut level = load_or_not_found(self.levels.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(value) = changes.level {
            if value != level.level().value()
                && self.levels.level_exists(level.class_id(), value).await?
            {
                return Err(level_taken(level.class_id(), value));
            }
            level.new_level(value)?;
        }
        if let Patch::Present(bonus) = changes.proficiency_bonus {
            level.new_proficiency_bonus(bonus)?;
        }
        if let Patch::Present((dice, description)) = changes.dice {
            level.new_dice(dice, description.as_deref())?;
        }
        if let Patch::Present((points, description)) = changes.points {
            level.new_points(points, description.as_deref())?;
        }
        if let Patch::Present((bonus_damage, description)) = changes.bonus_damage {
            level.new_bonus_damage(bonus_damage, description.as_deref())?;
        }

        self.levels.save(&level).await?;
        tracing::info!(class_level_id = %id, "Class level updated");
        Ok(())
    }
}

pub struct DeleteClassLevel {
    levels: Arc<dyn ClassLevelRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteClassLevel {
    pub fn new(levels: Arc<dyn ClassLevelRepo>, access: Arc<AccessGuard>) -> Self {
        Self { levels, access }
    }

    pub async fn execute(&self, user_id: UserId, id: ClassLevelId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.levels.id_exists(id).await?, ENTITY, id)?;
        self.levels.delete(id).await?;
        tracing::info!(class_level_id = %id, "Class level deleted");
        Ok(())
    }
}

pub struct GetClassLevel {
    levels: Arc<dyn ClassLevelRepo>,
}

impl GetClassLevel {
    pub fn new(levels: Arc<dyn ClassLevelRepo>) -> Self {
        Self { levels }
    }

    pub async fn execute(&self, id: ClassLevelId) -> Result<ClassLevel, UseCaseError> {
        load_or_not_found(self.levels.get(id).await?, ENTITY, id)
    }
}

/// Levels of one class, lowest first.
pub struct ListClassLevels {
    levels: Arc<dyn ClassLevelRepo>,
    classes: Arc<dyn ClassRepo>,
}

impl ListClassLevels {
    pub fn new(levels: Arc<dyn ClassLevelRepo>, classes: Arc<dyn ClassRepo>) -> Self {
        Self { levels, classes }
    }

    pub async fn execute(&self, class_id: ClassId) -> Result<Vec<ClassLevel>, UseCaseError> {
        ensure_target(self.classes.id_exists(class_id).await?, "Class", class_id)?;
        let mut levels = self.levels.list_for_class(class_id).await?;
        levels.sort_by_key(|level| level.level());
        Ok(levels)
    }
}

/// Container for class level use cases.
pub struct ClassLevelUseCases {
    pub create: CreateClassLevel,
    pub update: UpdateClassLevel,
    pub delete: DeleteClassLevel,
    pub get: GetClassLevel,
    pub list: ListClassLevels,
}

impl ClassLevelUseCases {
    pub fn new(
        levels: Arc<dyn ClassLevelRepo>,
        classes: Arc<dyn ClassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            create: CreateClassLevel::new(levels.clone(), classes.clone(), access.clone()),
            update: UpdateClassLevel::new(levels.clone(), access.clone()),
            delete: DeleteClassLevel::new(levels.clone(), access),
            get: GetClassLevel::new(levels.clone()),
            list: ListClassLevels::new(levels, classes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_domain::DiceType;

    use crate::infrastructure::ports::{MockClassLevelRepo, MockClassRepo, MockUserRepo};
    use crate::use_cases::ErrorStatus;

    fn allow_all_users() -> Arc<AccessGuard> {
        let mut users = MockUserRepo::new();
        users.expect_id_exists().returning(|_| Ok(true));
        Arc::new(AccessGuard::new(Arc::new(users)))
    }

    fn first_level(id: ClassLevelId, class_id: ClassId) -> ClassLevel {
        ClassLevel::new(
            id,
            class_id,
            1,
            2,
            Some(Dice::new(1, DiceType::D6).unwrap()),
            Some("Кость вдохновения"),
            None,
            None,
            None,
            None,
        )
        .unwrap()
    }

    fn create_command(class_id: ClassId) -> CreateClassLevelCommand {
        CreateClassLevelCommand {
            user_id: UserId::new(),
            class_id,
            level: 1,
            proficiency_bonus: 2,
            dice: None,
            dice_description: None,
            points: None,
            points_description: None,
            bonus_damage: None,
            bonus_damage_description: None,
        }
    }

    #[tokio::test]
    async fn create_requires_existing_class() {
        let mut classes = MockClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(false));
        let mut levels = MockClassLevelRepo::new();
        levels.expect_save().never();

        let use_cases =
            ClassLevelUseCases::new(Arc::new(levels), Arc::new(classes), allow_all_users());
        let err = use_cases
            .create
            .execute(create_command(ClassId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn create_rejects_level_already_defined_for_class() {
        let mut classes = MockClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));
        let mut levels = MockClassLevelRepo::new();
        levels.expect_level_exists().returning(|_, _| Ok(true));
        levels.expect_save().never();

        let use_cases =
            ClassLevelUseCases::new(Arc::new(levels), Arc::new(classes), allow_all_users());
        let err = use_cases
            .create
            .execute(create_command(ClassId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn create_rejects_points_without_description() {
        let mut classes = MockClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));
        let mut levels = MockClassLevelRepo::new();
        levels.expect_level_exists().returning(|_, _| Ok(false));
        levels.expect_next_id().returning(ClassLevelId::new);
        levels.expect_save().never();

        let use_cases =
            ClassLevelUseCases::new(Arc::new(levels), Arc::new(classes), allow_all_users());
        let mut command = create_command(ClassId::new());
        command.points = Some(2);
        let err = use_cases.create.execute(command).await.unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn clearing_dice_pair_saves_level_without_dice() {
        let id = ClassLevelId::new();
        let class_id = ClassId::new();
        let mut levels = MockClassLevelRepo::new();
        levels
            .expect_get()
            .returning(move |_| Ok(Some(first_level(id, class_id))));
        levels
            .expect_save()
            .withf(|level| level.dice().is_none())
            .times(1)
            .returning(|_| Ok(()));

        let use_cases = ClassLevelUseCases::new(
            Arc::new(levels),
            Arc::new(MockClassRepo::new()),
            allow_all_users(),
        );
        let command = UpdateClassLevelCommand::new(
            UserId::new(),
            id,
            ClassLevelChanges {
                dice: Patch::Present((None, None)),
                ..Default::default()
            },
        )
        .unwrap();

        use_cases.update.execute(command).await.unwrap();
    }

    #[tokio::test]
    async fn moving_to_taken_level_is_rejected() {
        let id = ClassLevelId::new();
        let class_id = ClassId::new();
        let mut levels = MockClassLevelRepo::new();
        levels
            .expect_get()
            .returning(move |_| Ok(Some(first_level(id, class_id))));
        levels
            .expect_level_exists()
            .withf(move |class, level| *class == class_id && *level == 2)
            .returning(|_, _| Ok(true));
        levels.expect_save().never();

        let use_cases = ClassLevelUseCases::new(
            Arc::new(levels),
            Arc::new(MockClassRepo::new()),
            allow_all_users(),
        );
        let command = UpdateClassLevelCommand::new(
            UserId::new(),
            id,
            ClassLevelChanges {
                level: Patch::Present(2),
                ..Default::default()
            },
        )
        .unwrap();
        let err = use_cases.update.execute(command).await.unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn list_sorts_by_level() {
        let class_id = ClassId::new();
        let mut classes = MockClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));
        let mut levels = MockClassLevelRepo::new();
        levels.expect_list_for_class().returning(move |class_id| {
            let mut third = first_level(ClassLevelId::new(), class_id);
            third.new_level(3).unwrap();
            Ok(vec![third, first_level(ClassLevelId::new(), class_id)])
        });

        let use_cases =
            ClassLevelUseCases::new(Arc::new(levels), Arc::new(classes), allow_all_users());
        let listed = use_cases.list.execute(class_id).await.unwrap();

        let numbers: Vec<u8> = listed.iter().map(|l| l.level().value()).collect();
        assert_eq!(numbers, vec![1, 3]);
    }
}
