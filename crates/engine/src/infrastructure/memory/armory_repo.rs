//! In-memory weapon, weapon kind and weapon property repositories.

use async_trait::async_trait;
use grimoire_domain::{
    Named, Weapon, WeaponId, WeaponKind, WeaponKindId, WeaponProperty, WeaponPropertyId,
    WeaponPropertyName,
};

use super::sorted_by_name;
use super::table::Table;
use crate::infrastructure::ports::{RepoError, WeaponKindRepo, WeaponPropertyRepo, WeaponRepo};

pub struct MemoryWeaponKindRepo {
    table: Table<WeaponKindId, WeaponKind>,
}

impl MemoryWeaponKindRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("WeaponKind"),
        }
    }
}

impl Default for MemoryWeaponKindRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeaponKindRepo for MemoryWeaponKindRepo {
    fn next_id(&self) -> WeaponKindId {
        WeaponKindId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|kind| kind.name() == name))
    }

    async fn id_exists(&self, id: WeaponKindId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: WeaponKindId) -> Result<Option<WeaponKind>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<WeaponKind>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, kind: &WeaponKind) -> Result<(), RepoError> {
        self.table.upsert(kind.id(), kind.clone());
        Ok(())
    }

    async fn delete(&self, id: WeaponKindId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemoryWeaponPropertyRepo {
    table: Table<WeaponPropertyId, WeaponProperty>,
}

impl MemoryWeaponPropertyRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("WeaponProperty"),
        }
    }
}

impl Default for MemoryWeaponPropertyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeaponPropertyRepo for MemoryWeaponPropertyRepo {
    fn next_id(&self) -> WeaponPropertyId {
        WeaponPropertyId::new()
    }

    async fn name_exists(&self, name: WeaponPropertyName) -> Result<bool, RepoError> {
        Ok(self.table.any(|property| property.name() == name))
    }

    async fn id_exists(&self, id: WeaponPropertyId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: WeaponPropertyId) -> Result<Option<WeaponProperty>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<WeaponProperty>, RepoError> {
        let mut properties = self.table.all();
        properties.sort_by_key(|property| property.name().as_str());
        Ok(properties)
    }

    async fn save(&self, property: &WeaponProperty) -> Result<(), RepoError> {
        self.table.upsert(property.id(), property.clone());
        Ok(())
    }

    async fn delete(&self, id: WeaponPropertyId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemoryWeaponRepo {
    table: Table<WeaponId, Weapon>,
}

impl MemoryWeaponRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("Weapon"),
        }
    }
}

impl Default for MemoryWeaponRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeaponRepo for MemoryWeaponRepo {
    fn next_id(&self) -> WeaponId {
        WeaponId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|weapon| weapon.name() == name))
    }

    async fn id_exists(&self, id: WeaponId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn kind_in_use(&self, kind_id: WeaponKindId) -> Result<bool, RepoError> {
        Ok(self.table.any(|weapon| weapon.kind_id() == kind_id))
    }

    async fn property_in_use(&self, property_id: WeaponPropertyId) -> Result<bool, RepoError> {
        Ok(self.table.any(|weapon| weapon.has_property(property_id)))
    }

    async fn get(&self, id: WeaponId) -> Result<Option<Weapon>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<Weapon>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, weapon: &Weapon) -> Result<(), RepoError> {
        self.table.upsert(weapon.id(), weapon.clone());
        Ok(())
    }

    async fn delete(&self, id: WeaponId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}
