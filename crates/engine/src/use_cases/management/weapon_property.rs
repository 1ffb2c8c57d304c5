//! Weapon property management.
//!
//! Renaming a property replaces its optional fields in the same step: the
//! range and dice patches supplied next to a new name become the complete
//! new set, and whatever is left out is cleared.

use std::sync::Arc;

use grimoire_domain::{Described, Dice, UserId, WeaponProperty, WeaponPropertyId, WeaponPropertyName};

use crate::infrastructure::ports::{WeaponPropertyRepo, WeaponRepo};
use crate::services::WeaponPropertyNamePolicy;
use crate::use_cases::access::{ensure_name_free, ensure_target, load_or_not_found, AccessGuard};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "WeaponProperty";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateWeaponPropertyCommand {
    pub user_id: UserId,
    pub name: WeaponPropertyName,
    pub description: String,
    pub base_range: Option<u16>,
    pub max_range: Option<u16>,
    pub second_hand_dice: Option<Dice>,
}

#[derive(Debug, Clone, Default)]
pub struct WeaponPropertyChanges {
    pub name: Patch<WeaponPropertyName>,
    pub description: Patch<String>,
    pub base_range: Patch<u16>,
    pub max_range: Patch<u16>,
    pub second_hand_dice: Patch<Dice>,
}

impl WeaponPropertyChanges {
    fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.description.is_absent()
            && self.base_range.is_absent()
            && self.max_range.is_absent()
            && self.second_hand_dice.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateWeaponPropertyCommand {
    user_id: UserId,
    weapon_property_id: WeaponPropertyId,
    changes: WeaponPropertyChanges,
}

impl UpdateWeaponPropertyCommand {
    pub fn new(
        user_id: UserId,
        weapon_property_id: WeaponPropertyId,
        changes: WeaponPropertyChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            weapon_property_id,
            changes,
        })
    }
}

// =============================================================================
// Use cases
// =============================================================================

pub struct CreateWeaponProperty {
    properties: Arc<dyn WeaponPropertyRepo>,
    names: Arc<WeaponPropertyNamePolicy>,
    access: Arc<AccessGuard>,
}

impl CreateWeaponProperty {
    pub fn new(
        properties: Arc<dyn WeaponPropertyRepo>,
        names: Arc<WeaponPropertyNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            properties,
            names,
            access,
        }
    }

    pub async fn execute(
        &self,
        command: CreateWeaponPropertyCommand,
    ) -> Result<WeaponPropertyId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name,
        )?;

        let property = WeaponProperty::new(
            self.properties.next_id(),
            command.name,
            &command.description,
            command.base_range,
            command.max_range,
            command.second_hand_dice,
        )?;
        self.properties.save(&property).await?;

        tracing::info!(
            weapon_property_id = %property.id(),
            name = %property.name(),
            "Weapon property created"
        );
        Ok(property.id())
    }
}

pub struct UpdateWeaponProperty {
    properties: Arc<dyn WeaponPropertyRepo>,
    names: Arc<WeaponPropertyNamePolicy>,
    access: Arc<AccessGuard>,
}

impl UpdateWeaponProperty {
    pub fn new(
        properties: Arc<dyn WeaponPropertyRepo>,
        names: Arc<WeaponPropertyNamePolicy>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            properties,
            names,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateWeaponPropertyCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.weapon_property_id;
        let mut property = load_or_not_found(self.properties.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        match changes.name {
            Patch::Present(name) => {
                if name != property.name() {
                    ensure_name_free(
                        self.names.can_rename_with_name(&name).await?,
                        ENTITY,
                        name,
                    )?;
                }
                property.new_name(
                    name,
                    changes.base_range.present(),
                    changes.max_range.present(),
                    changes.second_hand_dice.present(),
                )?;
            }
            Patch::Absent => {
                match (changes.base_range, changes.max_range) {
                    (Patch::Present(base), Patch::Present(max)) => {
                        property.new_ranges(base, max)?
                    }
                    (Patch::Present(base), Patch::Absent) => property.new_base_range(base)?,
                    (Patch::Absent, Patch::Present(max)) => property.new_max_range(max)?,
                    (Patch::Absent, Patch::Absent) => {}
                }
                if let Patch::Present(dice) = changes.second_hand_dice {
                    property.new_second_hand_dice(dice)?;
                }
            }
        }
        if let Patch::Present(description) = changes.description {
            property.new_description(&description)?;
        }

        self.properties.save(&property).await?;
        tracing::info!(weapon_property_id = %id, "Weapon property updated");
        Ok(())
    }
}

/// Deletes a weapon property that no weapon carries.
pub struct DeleteWeaponProperty {
    properties: Arc<dyn WeaponPropertyRepo>,
    weapons: Arc<dyn WeaponRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteWeaponProperty {
    pub fn new(
        properties: Arc<dyn WeaponPropertyRepo>,
        weapons: Arc<dyn WeaponRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            properties,
            weapons,
            access,
        }
    }

    pub async fn execute(&self, user_id: UserId, id: WeaponPropertyId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.properties.id_exists(id).await?, ENTITY, id)?;

        if self.weapons.property_in_use(id).await? {
            tracing::debug!(weapon_property_id = %id, "Weapon property still referenced by weapons");
            return Err(UseCaseError::invalid_data(format!(
                "Weapon property {} is used by existing weapons",
                id
            )));
        }

        self.properties.delete(id).await?;
        tracing::info!(weapon_property_id = %id, "Weapon property deleted");
        Ok(())
    }
}

pub struct GetWeaponProperty {
    properties: Arc<dyn WeaponPropertyRepo>,
}

impl GetWeaponProperty {
    pub fn new(properties: Arc<dyn WeaponPropertyRepo>) -> Self {
        Self { properties }
    }

    pub async fn execute(&self, id: WeaponPropertyId) -> Result<WeaponProperty, UseCaseError> {
        load_or_not_found(self.properties.get(id).await?, ENTITY, id)
    }
}

pub struct ListWeaponProperties {
    properties: Arc<dyn WeaponPropertyRepo>,
}

impl ListWeaponProperties {
    pub fn new(properties: Arc<dyn WeaponPropertyRepo>) -> Self {
        Self { properties }
    }

    pub async fn execute(&self) -> Result<Vec<WeaponProperty>, UseCaseError> {
        Ok(self.properties.list_all().await?)
    }
}

/// Container for weapon property use cases.
pub struct WeaponPropertyUseCases {
    pub create: CreateWeaponProperty,
    pub update: UpdateWeaponProperty,
    pub delete: DeleteWeaponProperty,
    pub get: GetWeaponProperty,
    pub list: ListWeaponProperties,
}

impl WeaponPropertyUseCases {
    pub fn new(
        properties: Arc<dyn WeaponPropertyRepo>,
        weapons: Arc<dyn WeaponRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(WeaponPropertyNamePolicy::new(properties.clone()));
        Self {
            create: CreateWeaponProperty::new(properties.clone(), names.clone(), access.clone()),
            update: UpdateWeaponProperty::new(properties.clone(), names, access.clone()),
            delete: DeleteWeaponProperty::new(properties.clone(), weapons, access),
            get: GetWeaponProperty::new(properties.clone()),
            list: ListWeaponProperties::new(properties),
        }
    }
}
