//! In-memory race and subrace repositories.

use async_trait::async_trait;
use grimoire_domain::{Named, Race, RaceId, Subrace, SubraceId};

use super::sorted_by_name;
use super::table::Table;
use crate::infrastructure::ports::{RaceRepo, RepoError, SubraceRepo};

pub struct MemoryRaceRepo {
    table: Table<RaceId, Race>,
}

impl MemoryRaceRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("Race"),
        }
    }
}

impl Default for MemoryRaceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RaceRepo for MemoryRaceRepo {
    fn next_id(&self) -> RaceId {
        RaceId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|race| race.name() == name))
    }

    async fn id_exists(&self, id: RaceId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn get(&self, id: RaceId) -> Result<Option<Race>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<Race>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, race: &Race) -> Result<(), RepoError> {
        self.table.upsert(race.id(), race.clone());
        Ok(())
    }

    async fn delete(&self, id: RaceId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}

pub struct MemorySubraceRepo {
    table: Table<SubraceId, Subrace>,
}

impl MemorySubraceRepo {
    pub fn new() -> Self {
        Self {
            table: Table::new("Subrace"),
        }
    }
}

impl Default for MemorySubraceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubraceRepo for MemorySubraceRepo {
    fn next_id(&self) -> SubraceId {
        SubraceId::new()
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        Ok(self.table.any(|subrace| subrace.name() == name))
    }

    async fn id_exists(&self, id: SubraceId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id))
    }

    async fn race_in_use(&self, race_id: RaceId) -> Result<bool, RepoError> {
        Ok(self.table.any(|subrace| subrace.race_id() == race_id))
    }

    async fn get(&self, id: SubraceId) -> Result<Option<Subrace>, RepoError> {
        Ok(self.table.get(id))
    }

    async fn list_all(&self) -> Result<Vec<Subrace>, RepoError> {
        Ok(sorted_by_name(self.table.all()))
    }

    async fn save(&self, subrace: &Subrace) -> Result<(), RepoError> {
        self.table.upsert(subrace.id(), subrace.clone());
        Ok(())
    }

    async fn delete(&self, id: SubraceId) -> Result<(), RepoError> {
        self.table.remove(id)
    }
}
