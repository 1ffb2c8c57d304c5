//! Weapon management.

use std::sync::Arc;

use grimoire_domain::{
    DamageType, Described, Dice, EnglishNamed, Named, SourceId, Sourced, UserId, Weapon,
    WeaponId, WeaponKindId, WeaponPropertyId,
};

use crate::infrastructure::ports::{
    ClassRepo, SourceRepo, WeaponKindRepo, WeaponPropertyRepo, WeaponRepo,
};
use crate::services::WeaponNamePolicy;
use crate::use_cases::access::{
    ensure_name_free, ensure_reference, ensure_target, load_or_not_found, AccessGuard,
};
use crate::use_cases::{Patch, UseCaseError};

const ENTITY: &str = "Weapon";

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone)]
pub struct CreateWeaponCommand {
    pub user_id: UserId,
    pub kind_id: WeaponKindId,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub damage_dice: Dice,
    pub damage_type: DamageType,
    pub weight: f32,
    pub property_ids: Vec<WeaponPropertyId>,
    pub name_in_english: String,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct WeaponChanges {
    pub kind_id: Patch<WeaponKindId>,
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub cost: Patch<u32>,
    pub damage_dice: Patch<Dice>,
    pub damage_type: Patch<DamageType>,
    pub weight: Patch<f32>,
    pub property_ids: Patch<Vec<WeaponPropertyId>>,
    pub name_in_english: Patch<String>,
    pub source_id: Patch<SourceId>,
}

impl WeaponChanges {
    fn is_empty(&self) -> bool {
        self.kind_id.is_absent()
            && self.name.is_absent()
            && self.description.is_absent()
            && self.cost.is_absent()
            && self.damage_dice.is_absent()
            && self.damage_type.is_absent()
            && self.weight.is_absent()
            && self.property_ids.is_absent()
            && self.name_in_english.is_absent()
            && self.source_id.is_absent()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateWeaponCommand {
    user_id: UserId,
    weapon_id: WeaponId,
    changes: WeaponChanges,
}

impl UpdateWeaponCommand {
    pub fn new(
        user_id: UserId,
        weapon_id: WeaponId,
        changes: WeaponChanges,
    ) -> Result<Self, UseCaseError> {
        if changes.is_empty() {
            return Err(UseCaseError::invalid_data("Nothing to update"));
        }
        Ok(Self {
            user_id,
            weapon_id,
            changes,
        })
    }
}

// =============================================================================
// Reference checks
// =============================================================================

/// Existence checks for the identifiers a weapon refers to.
pub struct WeaponReferences {
    kinds: Arc<dyn WeaponKindRepo>,
    properties: Arc<dyn WeaponPropertyRepo>,
    sources: Arc<dyn SourceRepo>,
}

impl WeaponReferences {
    pub fn new(
        kinds: Arc<dyn WeaponKindRepo>,
        properties: Arc<dyn WeaponPropertyRepo>,
        sources: Arc<dyn SourceRepo>,
    ) -> Self {
        Self {
            kinds,
            properties,
            sources,
        }
    }

    async fn check_kind(&self, id: WeaponKindId) -> Result<(), UseCaseError> {
        ensure_reference(self.kinds.id_exists(id).await?, "WeaponKind", id)
    }

    async fn check_properties(&self, ids: &[WeaponPropertyId]) -> Result<(), UseCaseError> {
        for id in ids {
            ensure_reference(self.properties.id_exists(*id).await?, "WeaponProperty", id)?;
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

pub struct CreateWeapon {
    weapons: Arc<dyn WeaponRepo>,
    names: Arc<WeaponNamePolicy>,
    references: Arc<WeaponReferences>,
    access: Arc<AccessGuard>,
}

impl CreateWeapon {
    pub fn new(
        weapons: Arc<dyn WeaponRepo>,
        names: Arc<WeaponNamePolicy>,
        references: Arc<WeaponReferences>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            weapons,
            names,
            references,
            access,
        }
    }

    pub async fn execute(&self, command: CreateWeaponCommand) -> Result<WeaponId, UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        ensure_name_free(
            self.names.can_create_with_name(command.name.as_str()).await?,
            ENTITY,
            &command.name,
        )?;
        self.references.check_kind(command.kind_id).await?;
        self.references.check_properties(&command.property_ids).await?;
        self.references.check_source(command.source_id).await?;

        let weapon = Weapon::new(
            self.weapons.next_id(),
            command.kind_id,
            &command.name,
            &command.description,
            command.cost,
            command.damage_dice,
            command.damage_type,
            command.weight,
            command.property_ids,
            &command.name_in_english,
            command.source_id,
        )?;
        self.weapons.save(&weapon).await?;

        tracing::info!(weapon_id = %weapon.id(), name = %weapon.name(), "Weapon created");
        Ok(weapon.id())
    }
}

pub struct UpdateWeapon {
    weapons: Arc<dyn WeaponRepo>,
    names: Arc<WeaponNamePolicy>,
    references: Arc<WeaponReferences>,
    access: Arc<AccessGuard>,
}

impl UpdateWeapon {
    pub fn new(
        weapons: Arc<dyn WeaponRepo>,
        names: Arc<WeaponNamePolicy>,
        references: Arc<WeaponReferences>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            weapons,
            names,
            references,
            access,
        }
    }

    pub async fn execute(&self, command: UpdateWeaponCommand) -> Result<(), UseCaseError> {
        self.access.ensure_user(command.user_id).await?;
        let id = command.weapon_id;
        let mut weapon = load_or_not_found(self.weapons.get(id).await?, ENTITY, id)?;
        let changes = command.changes;

        if let Patch::Present(kind_id) = changes.kind_id {
            self.references.check_kind(kind_id).await?;
            weapon.new_kind_id(kind_id)?;
        }
        if let Patch::Present(name) = changes.name {
            if name != weapon.name() {
                ensure_name_free(
                    self.names.can_rename_with_name(name.as_str()).await?,
                    ENTITY,
                    &name,
                )?;
            }
            weapon.new_name(&name)?;
        }
        if let Patch::Present(description) = changes.description {
            weapon.new_description(&description)?;
        }
        if let Patch::Present(cost) = changes.cost {
            weapon.new_cost(cost)?;
        }
        if let Patch::Present(dice) = changes.damage_dice {
            weapon.new_damage_dice(dice)?;
        }
        if let Patch::Present(damage_type) = changes.damage_type {
            weapon.new_damage_type(damage_type)?;
        }
        if let Patch::Present(weight) = changes.weight {
            weapon.new_weight(weight)?;
        }
        if let Patch::Present(property_ids) = changes.property_ids {
            self.references.check_properties(&property_ids).await?;
            weapon.new_property_ids(property_ids)?;
        }
        if let Patch::Present(name_in_english) = changes.name_in_english {
            weapon.new_name_in_english(&name_in_english)?;
        }
        if let Patch::Present(source_id) = changes.source_id {
            self.references.check_source(source_id).await?;
            weapon.new_source_id(source_id)?;
        }

        self.weapons.save(&weapon).await?;
        tracing::info!(weapon_id = %id, "Weapon updated");
        Ok(())
    }
}

/// Deletes a weapon that no class is proficient with.
pub struct DeleteWeapon {
    weapons: Arc<dyn WeaponRepo>,
    classes: Arc<dyn ClassRepo>,
    access: Arc<AccessGuard>,
}

impl DeleteWeapon {
    pub fn new(
        weapons: Arc<dyn WeaponRepo>,
        classes: Arc<dyn ClassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        Self {
            weapons,
            classes,
            access,
        }
    }

    pub async fn execute(&self, user_id: UserId, id: WeaponId) -> Result<(), UseCaseError> {
        self.access.ensure_user(user_id).await?;
        ensure_target(self.weapons.id_exists(id).await?, ENTITY, id)?;

        if self.classes.weapon_in_use(id).await? {
            tracing::debug!(weapon_id = %id, "Weapon still listed in class proficiencies");
            return Err(UseCaseError::invalid_data(format!(
                "Weapon {} is listed in class proficiencies",
                id
            )));
        }

        self.weapons.delete(id).await?;
        tracing::info!(weapon_id = %id, "Weapon deleted");
        Ok(())
    }
}

pub struct GetWeapon {
    weapons: Arc<dyn WeaponRepo>,
}

impl GetWeapon {
    pub fn new(weapons: Arc<dyn WeaponRepo>) -> Self {
        Self { weapons }
    }

    pub async fn execute(&self, id: WeaponId) -> Result<Weapon, UseCaseError> {
        load_or_not_found(self.weapons.get(id).await?, ENTITY, id)
    }
}

pub struct ListWeapons {
    weapons: Arc<dyn WeaponRepo>,
}

impl ListWeapons {
    pub fn new(weapons: Arc<dyn WeaponRepo>) -> Self {
        Self { weapons }
    }

    pub async fn execute(&self) -> Result<Vec<Weapon>, UseCaseError> {
        Ok(self.weapons.list_all().await?)
    }
}

/// Container for weapon use cases.
pub struct WeaponUseCases {
    pub create: CreateWeapon,
    pub update: UpdateWeapon,
    pub delete: DeleteWeapon,
    pub get: GetWeapon,
    pub list: ListWeapons,
}

impl WeaponUseCases {
    pub fn new(
        weapons: Arc<dyn WeaponRepo>,
        kinds: Arc<dyn WeaponKindRepo>,
        properties: Arc<dyn WeaponPropertyRepo>,
        sources: Arc<dyn SourceRepo>,
        classes: Arc<dyn ClassRepo>,
        access: Arc<AccessGuard>,
    ) -> Self {
        let names = Arc::new(WeaponNamePolicy::new(weapons.clone()));
        let references = Arc::new(WeaponReferences::new(kinds, properties, sources));
        Self {
            create: CreateWeapon::new(
                weapons.clone(),
                names.clone(),
                references.clone(),
                access.clone(),
            ),
            update: UpdateWeapon::new(weapons.clone(), names, references, access.clone()),
            delete: DeleteWeapon::new(weapons.clone(), classes, access),
            get: GetWeapon::new(weapons.clone()),
            list: ListWeapons::new(weapons),
        }
    }
}
