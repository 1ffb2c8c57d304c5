//! In-memory class, class level and feature repositories.

use async_trait::async_trait;
use grimoire_domain::{
    CharacterClass, ClassFeature, ClassFeatureId, ClassId, ClassLevel, ClassLevelId, Named,
    SubclassFeature, SubclassFeatureId, SubclassId, WeaponId,
};

use super::sorted_by_name;
use super::table::Table;
use crate::infrastructure::ports::{
    ClassFeatureRepo, ClassLevelRepo, ClassRepo, RepoError, SubclassFeatureRepo,
};

pub struct MemoryClassRepo {
    table: Table<ClassId, CharacterClass>,
}

impl MemoryClassRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("Class"),
        }
    }
}

impl Default for MemoryClassRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassRepo for MemoryClassRepo {
    fn next_id(&self) -> ClassId {
        ClassId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|class| class.name() == name))
    }

    async fn id_exists(&self, id: ClassId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn weapon_in_use(&self, weapon_id: WeaponId) -> Result<bool, RepoError> {
        Ok(self
            .table
            .any(|class| class.proficiencies().weapons().contains(&weapon_id)))
    }

    async fn get(&self, id: ClassId) -> Result<Option<CharacterClass>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<CharacterClass>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, class: &CharacterClass) -> Result<(), RepoError> {
        self.table.upsert(class.id(), class.clone());
        Ok(())
    }

    async fn delete(&self, id: ClassId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemoryClassLevelRepo {
    table: Table<ClassLevelId, ClassLevel>,
}

impl MemoryClassLevelRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("ClassLevel"),
        }
    }
}

impl Default for MemoryClassLevelRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassLevelRepo for MemoryClassLevelRepo {
    fn next_id(&self) -> ClassLevelId {
        ClassLevelId::new()
    }

    async fn id_exists(&self, id: ClassLevelId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn level_exists(&self, class_id: ClassId, level: u8) -> Result<bool, RepoError> {
        Ok(self
            .table
            .any(|row| row.class_id() == class_id && row.level().value() == level))
    }

    async fn get(&self, id: ClassLevelId) -> Result<Option<ClassLevel>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_for_class(&self, class_id: ClassId) -> Result<Vec<ClassLevel>, RepoError> {
        let mut levels = self.table.filter(|row| row.class_id() == class_id);
        levels.sort_by_key(|row| row.level());
        Ok(levels)
    }

    async fn save(&self, level: &ClassLevel) -> Result<(), RepoError> {
        self.table.upsert(level.id(), level.clone());
        Ok(())
    }

    async fn delete(&self, id: ClassLevelId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemoryClassFeatureRepo {
    table: Table<ClassFeatureId, ClassFeature>,
}

impl MemoryClassFeatureRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("ClassFeature"),
        }
    }
}

impl Default for MemoryClassFeatureRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassFeatureRepo for MemoryClassFeatureRepo {
    fn next_id(&self) -> ClassFeatureId {
        ClassFeatureId::new()
    }

    async fn name_exists_in_class(
        &self,
        class_id: ClassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(self
            .table
            .any(|feature| feature.owner_id() == class_id && feature.name() == name))
    }

    async fn id_exists(&self, id: ClassFeatureId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: ClassFeatureId) -> Result<Option<ClassFeature>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_for_class(&self, class_id: ClassId) -> Result<Vec<ClassFeature>, RepoError> {
        Ok(sorted_by_name(
            self.table.filter(|feature| feature.owner_id() == class_id),
        ))
    }

    async fn save(&self, feature: &ClassFeature) -> Result<(), RepoError> {
        self.table.upsert(feature.id(), feature.clone());
        Ok(())
    }

    async fn delete(&self, id: ClassFeatureId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemorySubclassFeatureRepo {
    table: Table<SubclassFeatureId, SubclassFeature>,
}

impl MemorySubclassFeatureRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("SubclassFeature"),
        }
    }
}

impl Default for MemorySubclassFeatureRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubclassFeatureRepo for MemorySubclassFeatureRepo {
    fn next_id(&self) -> SubclassFeatureId {
        SubclassFeatureId::new()
    }

    async fn name_exists_in_subclass(
        &self,
        subclass_id: SubclassId,
        name: &str,
    ) -> Result<bool, RepoError> {
        Ok(self
            .table
            .any(|feature| feature.owner_id() == subclass_id && feature.name() == name))
    }

    async fn id_exists(&self, id: SubclassFeatureId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: SubclassFeatureId) -> Result<Option<SubclassFeature>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_for_subclass(
        &self,
        subclass_id: SubclassId,
    ) -> Result<Vec<SubclassFeature>, RepoError> {
        Ok(sorted_by_name(
            self.table.filter(|feature| feature.owner_id() == subclass_id),
        ))
    }

    async fn save(&self, feature: &SubclassFeature) -> Result<(), RepoError> {
        self.table.upsert(feature.id(), feature.clone());
        Ok(())
    }

    async fn delete(&self, id: SubclassFeatureId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}
