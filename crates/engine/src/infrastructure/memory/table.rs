//! Shared row storage for the in-memory repositories.

use std::fmt::Display;
use std::hash::Hash;

use dashmap::DashMap;

use crate::infrastructure::ports::RepoError;

/// One table of aggregates keyed by id.
pub(crate) struct Table<Id, T> {
    entity_type: &'static str,
    rows: DashMap<Id, T>,
}

impl<Id, T> Table<Id, T>
where
    Id: Copy + Eq + Hash + Display,
    T: Clone,
{
    pub(crate) fn new(entity_type: &'static str) -> Self {
        Self {
            entity_type,
            rows: DashMap::new(),
        }
    }

    pub(crate) fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    pub(crate) fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    pub(crate) fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.rows.iter().any(|row| predicate(row.value()))
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| predicate(row.value()))
            .map(|row| row.value().clone())
            .collect()
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    pub(crate) fn upsert(&self, id: Id, row: T) {
        self.rows.insert(id, row);
    }

    pub(crate) fn remove(&self, id: Id) -> Result<(), RepoError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found(self.entity_type, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grimoire_domain::FeatId;

    #[test]
    fn removing_absent_row_is_not_found() {
        let table: Table<FeatId, String> = Table::new("Feat");
        let err = table.remove(FeatId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn upsert_replaces_existing_row() {
        let table = Table::new("Feat");
        let id = FeatId::new();
        table.upsert(id, "Борец".to_string());
        table.upsert(id, "Атлет".to_string());

        assert_eq!(table.all().len(), 1);
        assert_eq!(table.get(id).as_deref(), Some("Атлет"));
    }
}
