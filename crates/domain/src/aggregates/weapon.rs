//! Weapon aggregate - a concrete weapon of some kind with its properties

use crate::error::{DomainError, DomainResult};
use crate::ids::{SourceId, WeaponId, WeaponKindId, WeaponPropertyId};
use crate::types::DamageType;
use crate::value_objects::invariants::{ensure_changed, ensure_distinct, ensure_list_changed};
use crate::value_objects::{impl_fields, Description, Dice, Name, NameInEnglish};

/// A weapon from the equipment tables
///
/// # Invariants
///
/// - `weight` is finite and not negative
/// - `property_ids` holds no duplicates
#[derive(Debug, Clone)]
pub struct Weapon {
    id: WeaponId,
    kind_id: WeaponKindId,
    name: Name,
    description: Description,
    /// Price in gold pieces
    cost: u32,
    damage_dice: Dice,
    damage_type: DamageType,
    /// Weight in pounds
    weight: f32,
    property_ids: Vec<WeaponPropertyId>,
    name_in_english: NameInEnglish,
    source_id: SourceId,
}

impl_fields!(Weapon {
    name: name,
    description: description,
    name_in_english: name_in_english,
    source: source_id,
});

identity_eq!(Weapon, WeaponId);

impl Weapon {
    pub fn new(
        id: WeaponId,
        kind_id: WeaponKindId,
        name: &str,
        description: &str,
        cost: u32,
        damage_dice: Dice,
        damage_type: DamageType,
        weight: f32,
        property_ids: Vec<WeaponPropertyId>,
        name_in_english: &str,
        source_id: SourceId,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        validate_weight(weight)?;
        ensure_distinct(&property_ids, "properties")?;
        let name_in_english = NameInEnglish::new(name_in_english)?;

        Ok(Self {
            id,
            kind_id,
            name,
            description,
            cost,
            damage_dice,
            damage_type,
            weight,
            property_ids,
            name_in_english,
            source_id,
        })
    }

    #[inline]
    pub fn id(&self) -> WeaponId {
        self.id
    }

    pub fn kind_id(&self) -> WeaponKindId {
        self.kind_id
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn damage_dice(&self) -> Dice {
        self.damage_dice
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn property_ids(&self) -> &[WeaponPropertyId] {
        &self.property_ids
    }

    pub fn has_property(&self, property_id: WeaponPropertyId) -> bool {
        self.property_ids.contains(&property_id)
    }

    pub fn new_kind_id(&mut self, kind_id: WeaponKindId) -> DomainResult<()> {
        ensure_changed(&self.kind_id, &kind_id, "kind id")?;
        self.kind_id = kind_id;
        Ok(())
    }

    pub fn new_cost(&mut self, cost: u32) -> DomainResult<()> {
        ensure_changed(&self.cost, &cost, "cost")?;
        self.cost = cost;
        Ok(())
    }

    pub fn new_damage_dice(&mut self, dice: Dice) -> DomainResult<()> {
        ensure_changed(&self.damage_dice, &dice, "damage dice")?;
        self.damage_dice = dice;
        Ok(())
    }

    pub fn new_damage_type(&mut self, damage_type: DamageType) -> DomainResult<()> {
        ensure_changed(&self.damage_type, &damage_type, "damage type")?;
        self.damage_type = damage_type;
        Ok(())
    }

    pub fn new_weight(&mut self, weight: f32) -> DomainResult<()> {
        ensure_changed(&self.weight, &weight, "weight")?;
        validate_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    pub fn new_property_ids(&mut self, property_ids: Vec<WeaponPropertyId>) -> DomainResult<()> {
        ensure_list_changed(&self.property_ids, &property_ids, "properties")?;
        ensure_distinct(&property_ids, "properties")?;
        self.property_ids = property_ids;
        Ok(())
    }
}

fn validate_weight(weight: f32) -> DomainResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(DomainError::invalid_data(format!(
            "Weight must be a non-negative number, got {}",
            weight
        )));
    }
    Ok(())
}
