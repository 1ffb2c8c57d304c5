//! Weapon kind management.

use std::sync::Arc;

use grimoire_domain::{Described, Named, UserId, WeaponKind, WeaponKindId, WeaponType};

use crate::infrastructure::ports::{WeaponKindRepo, WeaponRepo};
use crate::services::WeaponKindNamePolicy;
use crate::use_cases::access::{ensure_name_free, ensure_target, load_or_not_found, AccessGuard};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "WeaponKind";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateWeaponKindCommand {
    pub user_id: UserId,
    pub weapon_type: WeaponType,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct WeaponKindChanges {
    pub weapon_type: Patch<WeaponType>,
    pub name: Patch<String>,
    pub description: Patch<String>,
}

impl WeaponKindChanges {
    fn is_empty(&self) -> bool {
        self.weapon_type.is_absent() && self.name.is_absent() && self.description.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateWeaponKindCommand {
    user_id: UserId,
    weapon_kind_id: WeaponKindId,
    changes: WeaponKindChanges,
}

impl UpdateWeaponKindCommand {
    pub fn new(
        user_id: UserId,
        weapon_kind_id: WeaponKindId,
        changes: WeaponKindChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            weapon_kind_id,
            changes,
        })
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateWeaponKind {
    kinds: Arc<dyn WeaponKindRepo>,
    names: Arc<WeaponKindNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateWeaponKind {
    pub fn new(
        kinds: Arc<dyn WeaponKindRepo>,
        names: Arc<WeaponKindNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            kinds,
            names,
            access,
        }
    }

    pub async fn execute(
        &self,
        command: CreateWeaponKindCommand,
    ) -> Result<WeaponKindId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;

        let kind = WeaponKind::new(
            self.kinds.next_id(),
            command.weapon_type,
            &command.name,
            &command.description,
        )?;
        self.kinds.save(&kind).await?;

        tracing::info!(weapon_kind_id = %kind.id(), name = %kind.name(), "Weapon kind created");
        Ok(kind.id())
    }
}

pub struct UpdateWeaponKind {
    kinds: Arc<dyn WeaponKindRepo>,
    names: Arc<WeaponKindNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateWeaponKind {
    pub fn new(
        kinds: Arc<dyn WeaponKindRepo>,
        names: Arc<WeaponKindNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            kinds,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateWeaponKindCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.weapon_kind_id;
        let mut kind = load_or_not_found(self.kinds.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(weapon_type) = changes.weapon_type {
            kind.new_weapon_type(weapon_type)?;
        }
        if let Patch::Present(name) = changes.name {
            if name != kind.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            kind.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            kind.new_description(&description)?;
        }

        self.kinds.save(&kind).await?;
        tracing::info!(weapon_kind_id = %id, "Weapon kind updated");
        Ok(())
    }
}

/// Deletes a weapon kind that no weapon refers to.
pub struct DeleteWeaponKind {
    kinds: Arc<dyn WeaponKindRepo>,
    weapons: Arc<dyn WeaponRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteWeaponKind {
    pub fn new(
        kinds: Arc<dyn WeaponKindRepo>,
        weapons: Arc<dyn WeaponRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            kinds,
            weapons,
            access,
        }
    }

    pub async fn execute(&self, user_id: UserId, id: WeaponKindId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.kinds.id_exists(id).await?, ENTITY, id)?;

        if self.weapons.kind_in_use(id).await? {
            tracing::debug!(weapon_kind_id = %id, "Weapon kind still referenced by weapons");
            return Err(UseCaseError::invalid_data(format!(
                "Weapon kind {} is used by existing weapons",
                id
            )));
        }

        self.kinds.delete(id).await?;
        tracing::info!(weapon_kind_id = %id, "Weapon kind deleted");
        Ok(())
    }
}

pub struct GetWeaponKind {
    kinds: Arc<dyn WeaponKindRepo>,
}

impl GetWeaponKind {
    pub fn new(kinds: Arc<dyn WeaponKindRepo>) -> Self {
        Self { kinds }
    }

    pub async fn execute(&self, id: WeaponKindId) -> Result<WeaponKind, UseCaseError> {
        load_or_not_found(self.kinds.get(id).await?, ENTITY, id)
    }
}

pub struct ListWeaponKinds {
    kinds: Arc<dyn WeaponKindRepo>,
}

impl ListWeaponKinds {
    pub fn new(kinds: Arc<dyn WeaponKindRepo>) -> Self {
        Self { kinds }
    }

    pub async fn execute(&self) -> Result<Vec<WeaponKind>, UseCaseError> {
        Ok(self.kinds.list_all().await?)
    }
}

/// Container for weapon kind use cases.
pub struct WeaponKindUseCases {
    pub create: CreateWeaponKind,
    pub update: UpdateWeaponKind,
    pub delete: DeleteWeaponKind,
    pub get: GetWeaponKind,
    pub list: ListWeaponKinds,
}

impl WeaponKindUseCases {
    pub fn new(
        kinds: Arc<dyn WeaponKindRepo>,
        weapons: Arc<dyn WeaponRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(WeaponKindNamePolicy::new(kinds.clone()));
        Self {
            create: CreateWeaponKind::new(kinds.clone(), names.clone(), access.clone()),
            update: UpdateWeaponKind::new(kinds.clone(), names, access.clone()),
            delete: DeleteWeaponKind::new(kinds.clone(), weapons, access),
            get: GetWeaponKind::new(kinds.clone()),
            list: ListWeaponKinds::new(kinds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockUserRepo, MockWeaponKindRepo, MockWeaponRepo};
    use crate::use_cases::ErrorStatus;

    fn allow_all_users() -> Arc<AccessGuard> {
        let mut users = MockUserRepo::new();
        users.expect_id_exists().returning(|_| Ok(true));
        Arc::new(AccessGuard::new(Arc::new(users)))
    }

    fn longswords(id: WeaponKindId) -> WeaponKind {
        WeaponKind::new(id, WeaponType::MartialMelee, "длинные мечи", "Клинки").unwrap()
    }

    #[test]
    fn update_command_needs_at_least_one_change() {
        let err = UpdateWeaponKindCommand::new(
            UserId::new(),
            WeaponKindId::new(),
            WeaponKindChanges::default(),
        )
        .unwrap_err();
        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn create_rejects_taken_name() {
        let mut kinds = MockWeaponKindRepo::new();
        kinds.expect_name_exists().returning(|_| Ok(true));
        let kinds: Arc<dyn WeaponKindRepo> = Arc::new(kinds);

        let use_case = CreateWeaponKind::new(
            kinds.clone(),
            Arc::new(WeaponKindNamePolicy::new(kinds)),
            allow_all_users(),
        );
        let err = use_case
            .execute(CreateWeaponKindCommand {
                user_id: UserId::new(),
                weapon_type: WeaponType::SimpleMelee,
                name: "дубины".into(),
                description: "Палки".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn create_saves_with_repository_id() {
        let id = WeaponKindId::new();
        let mut kinds = MockWeaponKindRepo::new();
        kinds.expect_name_exists().returning(|_| Ok(false));
        kinds.expect_next_id().return_const(id);
        kinds
            .expect_save()
            .withf(move |kind| kind.id() == id && kind.name() == "дубины")
            .times(1)
            .returning(|_| Ok(()));
        let kinds: Arc<dyn WeaponKindRepo> = Arc::new(kinds);

        let use_case = CreateWeaponKind::new(
            kinds.clone(),
            Arc::new(WeaponKindNamePolicy::new(kinds)),
            allow_all_users(),
        );
        let created = use_case
            .execute(CreateWeaponKindCommand {
                user_id: UserId::new(),
                weapon_type: WeaponType::SimpleMelee,
                name: "дубины".into(),
                description: "Палки".into(),
            })
            .await
            .unwrap();

        assert_eq!(created, id);
    }

    #[tokio::test]
    async fn update_missing_kind_is_not_found() {
        let mut kinds = MockWeaponKindRepo::new();
        kinds.expect_get().returning(|_| Ok(None));
        let kinds: Arc<dyn WeaponKindRepo> = Arc::new(kinds);

        let use_case = UpdateWeaponKind::new(
            kinds.clone(),
            Arc::new(WeaponKindNamePolicy::new(kinds)),
            allow_all_users(),
        );
        let command = UpdateWeaponKindCommand::new(
            UserId::new(),
            WeaponKindId::new(),
            WeaponKindChanges {
                weapon_type: Patch::Present(WeaponType::SimpleRange),
                ..Default::default()
            },
        )
        .unwrap();

        let err = use_case.execute(command).await.unwrap_err();
        assert_eq!(err.status(), ErrorStatus::NotFound);
    }

    #[tokio::test]
    async fn update_with_same_type_is_idempotent() {
        let id = WeaponKindId::new();
        let mut kinds = MockWeaponKindRepo::new();
        kinds
            .expect_get()
            .returning(move |_| Ok(Some(longswords(id))));
        kinds.expect_save().never();
        let kinds: Arc<dyn WeaponKindRepo> = Arc::new(kinds);

        let use_case = UpdateWeaponKind::new(
            kinds.clone(),
            Arc::new(WeaponKindNamePolicy::new(kinds)),
            allow_all_users(),
        );
        let command = UpdateWeaponKindCommand::new(
            UserId::new(),
            id,
            WeaponKindChanges {
                weapon_type: Patch::Present(WeaponType::MartialMelee),
                ..Default::default()
            },
        )
        .unwrap();

        let err = use_case.execute(command).await.unwrap_err();
        assert_eq!(err.status(), ErrorStatus::Idempotent);
    }

    #[tokio::test]
    async fn delete_refuses_kind_in_use() {
        let id = WeaponKindId::new();
        let mut kinds = MockWeaponKindRepo::new();
        kinds.expect_id_exists().returning(|_| Ok(true));
        kinds.expect_delete().never();
        let mut weapons = MockWeaponRepo::new();
        weapons
            .expect_kind_in_use()
            .withf(move |kind_id| *kind_id == id)
            .returning(|_| Ok(true));

        let use_case =
            DeleteWeaponKind::new(Arc::new(kinds), Arc::new(weapons), allow_all_users());
        let err = use_case.execute(UserId::new(), id).await.unwrap_err();

        assert_eq!(err.status(), ErrorStatus::InvalidData);
    }

    #[tokio::test]
    async fn delete_missing_kind_is_not_found() {
        let mut kinds = MockWeaponKindRepo::new();
        kinds.expect_id_exists().returning(|_| Ok(false));

        let use_case = DeleteWeaponKind::new(
            Arc::new(kinds),
            Arc::new(MockWeaponRepo::new()),
            allow_all_users(),
        );
        let err = use_case
            .execute(UserId::new(), WeaponKindId::new())
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::NotFound);
    }

    #[tokio::test]
    async fn unknown_user_cannot_delete() {
        let mut users = MockUserRepo::new();
        users.expect_id_exists().returning(|_| Ok(false));

        let use_case = DeleteWeaponKind::new(
            Arc::new(MockWeaponKindRepo::new()),
            Arc::new(MockWeaponRepo::new()),
            Arc::new(AccessGuard::new(Arc::new(users))),
        );
        let err = use_case
            .execute(UserId::new(), WeaponKindId::new())
            .await
            .unwrap_err();

        assert_eq!(err.status(), ErrorStatus::Access);
    }
}
