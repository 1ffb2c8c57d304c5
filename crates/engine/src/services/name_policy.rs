//! Name availability policies.
//!
//! Aggregates never query storage, so name uniqueness is checked here and the
//! use case decides what to do with the answer. Both questions currently
//! reduce to "is the name free?", but callers ask the one matching their
//! intent so the rules can diverge without touching them.

use std::sync::Arc;

use async_trait::async_trait;
use grimoire_domain::{ClassId, SubclassId, WeaponPropertyName};

use crate::infrastructure::ports::{
    ClassFeatureRepo, ClassRepo, FeatRepo, RaceRepo, RepoError, SubclassFeatureRepo,
    SubraceRepo, WeaponKindRepo, WeaponPropertyRepo, WeaponRepo,
};

/// Storage able to tell whether a name is already taken.
#[async_trait]
pub trait NameIndex: Send + Sync {
    type Key: ?Sized + Sync;

    async fn name_taken(&self, key: &Self::Key) -> Result<bool, RepoError>;
}

/// Storage able to tell whether a name is taken within one owner.
#[async_trait]
pub trait ScopedNameIndex: Send + Sync {
    type Scope: Copy + Send + Sync;

    async fn name_taken_in(&self, scope: Self::Scope, name: &str) -> Result<bool, RepoError>;
}

macro_rules! name_index {
    ($repo:ident, $key:ty) => {
        #[async_trait]
        impl NameIndex for dyn $repo {
            type Key = $key;

            async fn name_taken(&self, key: &$key) -> Result<bool, RepoError> {
                self.name_exists(key).await
            }
        }
    };
}

name_index!(ClassRepo, str);
name_index!(RaceRepo, str);
name_index!(SubraceRepo, str);
name_index!(WeaponKindRepo, str);
name_index!(WeaponRepo, str);
name_index!(FeatRepo, str);

#[async_trait]
impl NameIndex for dyn WeaponPropertyRepo {
    type Key = WeaponPropertyName;

    async fn name_taken(&self, key: &WeaponPropertyName) -> Result<bool, RepoError> {
        self.name_exists(*key).await
    }
}

#[async_trait]
impl ScopedNameIndex for dyn ClassFeatureRepo {
    type Scope = ClassId;

    async fn name_taken_in(&self, scope: ClassId, name: &str) -> Result<bool, RepoError> {
        self.name_exists_in_class(scope, name).await
    }
}

#[async_trait]
impl ScopedNameIndex for dyn SubclassFeatureRepo {
    type Scope = SubclassId;

    async fn name_taken_in(&self, scope: SubclassId, name: &str) -> Result<bool, RepoError> {
        self.name_exists_in_subclass(scope, name).await
    }
}

/// Name availability for aggregates whose names are unique repository-wide.
pub struct UniqueNamePolicy<R: ?Sized + NameIndex> {
    index: Arc<R>,
}

impl<R: ?Sized + NameIndex> UniqueNamePolicy<R> {
    pub fn new(index: Arc<R>) -> Self {
        Self { index }
    }

    pub async fn can_create_with_name(&self, name: &R::Key) -> Result<bool, RepoError> {
        Ok(!self.index.name_taken(name).await?)
    }

    pub async fn can_rename_with_name(&self, name: &R::Key) -> Result<bool, RepoError> {
        Ok(!self.index.name_taken(name).await?)
    }
}

/// Name availability for features, unique within their class or subclass.
pub struct ScopedNamePolicy<R: ?Sized + ScopedNameIndex> {
    index: Arc<R>,
}

impl<R: ?Sized + ScopedNameIndex> ScopedNamePolicy<R> {
    pub fn new(index: Arc<R>) -> Self {
        Self { index }
    }

    pub async fn can_create_with_name(&self, scope: R::Scope, name: &str) -> Result<bool, RepoError> {
        Ok(!self.index.name_taken_in(scope, name).await?)
    }

    pub async fn can_rename_with_name(&self, scope: R::Scope, name: &str) -> Result<bool, RepoError> {
        Ok(!self.index.name_taken_in(scope, name).await?)
    }
}

pub type ClassNamePolicy = UniqueNamePolicy<dyn ClassRepo>;
pub type RaceNamePolicy = UniqueNamePolicy<dyn RaceRepo>;
pub type SubraceNamePolicy = UniqueNamePolicy<dyn SubraceRepo>;
pub type WeaponKindNamePolicy = UniqueNamePolicy<dyn WeaponKindRepo>;
pub type WeaponPropertyNamePolicy = UniqueNamePolicy<dyn WeaponPropertyRepo>;
pub type WeaponNamePolicy = UniqueNamePolicy<dyn WeaponRepo>;
pub type FeatNamePolicy = UniqueNamePolicy<dyn FeatRepo>;
pub type ClassFeatureNamePolicy = ScopedNamePolicy<dyn ClassFeatureRepo>;
pub type SubclassFeatureNamePolicy = ScopedNamePolicy<dyn SubclassFeatureRepo>;
