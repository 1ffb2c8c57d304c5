//! Identifier registries for entities owned by other services.
//!
//! Users, sources, tools and subclasses are not managed here; the catalogue
//! only needs to know which identifiers exist.

use std::hash::Hash;

use async_trait::async_trait;
use dashmap::DashSet;
use grimoire_domain::{SourceId, SubclassId, ToolId, UserId};

use crate::infrastructure::ports::{RepoError, SourceRepo, SubclassRepo, ToolRepo, UserRepo};

pub struct MemoryRegistry<Id: Eq + Hash> {
    ids: DashSet<Id>,
}

impl<Id: Copy + Eq + Hash> MemoryRegistry<Id> {
    pub fn new() -> Self {
        Self {
            ids: DashSet::new(),
        }
    }

    /// Returns `false` if the id was already registered.
    pub fn register(&self, id: Id) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<Id: Copy + Eq + Hash> Default for MemoryRegistry<Id> {
    fn default() -> Self {
        Self::new()
    }
}

pub type MemoryUserRepo = MemoryRegistry<UserId>;
pub type MemorySourceRepo = MemoryRegistry<SourceId>;
pub type MemoryToolRepo = MemoryRegistry<ToolId>;
pub type MemorySubclassRepo = MemoryRegistry<SubclassId>;

macro_rules! registry_port {
    ($port:ident, $id:ty) => {
        #[async_trait]
        impl $port for MemoryRegistry<$id> {
            async fn id_exists(&self, id: $id) -> Result<bool, RepoError> {
                Ok(self.contains(id))
            }
        }
    };
}

registry_port!(UserRepo, UserId);
registry_port!(SourceRepo, SourceId);
registry_port!(ToolRepo, ToolId);
registry_port!(SubclassRepo, SubclassId);
