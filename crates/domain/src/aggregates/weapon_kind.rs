//! WeaponKind aggregate - a family of weapons (longswords, shortbows...)

use crate::error::DomainResult;
use crate::ids::WeaponKindId;
use crate::types::WeaponType;
use crate::value_objects::invariants::ensure_changed;
use crate::value_objects::{impl_fields, Description, Name};

#[derive(Debug, Clone)]
pub struct WeaponKind {
    id: WeaponKindId,
    weapon_type: WeaponType,
    name: Name,
    description: Description,
}

impl_fields!(WeaponKind {
    name: name,
    description: description,
});

identity_eq!(WeaponKind, WeaponKindId);

impl WeaponKind {
    pub fn new(
        id: WeaponKindId,
        weapon_type: WeaponType,
        name: &str,
        description: &str,
    ) -> DomainResult<Self> {
        let name = Name::new(name)?;
        let description = Description::new(description)?;
        Ok(Self {
            id,
            weapon_type,
            name,
            description,
        })
    }

    #[inline]
    pub fn id(&self) -> WeaponKindId {
        self.id
    }

    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    pub fn new_weapon_type(&mut self, weapon_type: WeaponType) -> DomainResult<()> {
        ensure_changed(&self.weapon_type, &weapon_type, "weapon type")?;
        self.weapon_type = weapon_type;
        Ok(())
    }
}
