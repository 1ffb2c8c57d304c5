//! In-memory feat repository.

use async_trait::async_trait;
use grimoire_domain::{Feat, FeatId, Named};

use super::sorted_by_name;
use super::table::Table;
use crate::infrastructure::ports::{FeatRepo, RepoError};

pub struct MemoryFeatRepo {
    table: Table<FeatId, Feat>,
}

impl MemoryFeatRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("Feat"),
        }
    }
}

impl Default for MemoryFeatRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeatRepo for MemoryFeatRepo {
    fn next_id(&self) -> FeatId {
        FeatId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|feat| feat.name() == name))
    }

    async fn id_exists(&self, id: FeatId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: FeatId) -> Result<Option<Feat>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<Feat>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, feat: &Feat) -> Result<(), RepoError> {
        self.table.upsert(feat.id(), feat.clone());
        Ok(())
    }

    async fn delete(&self, id: FeatId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}
