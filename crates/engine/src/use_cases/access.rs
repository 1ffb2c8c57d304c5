//! Caller authorization and precondition helpers shared by use cases.

use std::fmt::Display;
use std::sync::Arc;

use grimoire_domain::UserId;

use crate::infrastructure::ports::UserRepo;

use super::error::UseCaseError;

/// Rejects callers that are not registered users.
pub struct AccessGuard {
    users: Arc<dyn UserRepo>,
}

impl AccessGuard {
    pub fn new(users: Arc<dyn UserRepo>) -> Self {
        Self { users }
    }

    pub async fn ensure_user(&self, user_id: UserId) -> Result<(), UseCaseError> {
        if !self.users.id_exists(user_id).await? {
            tracing::debug!(user_id = %user_id, "Rejected unknown user");
            return Err(UseCaseError::Access(format!("Unknown user {}", user_id)));
        }
        Ok(())
    }
}

/// Turn a missing row into `UseCaseError::NotFound`.
pub(crate) fn load_or_not_found<T>(
    found: Option<T>,
    entity_type: &'static str,
    id: impl Display,
) -> Result<T, UseCaseError> {
    found.ok_or_else(|| UseCaseError::not_found(entity_type, id))
}

/// The target of a command must exist.
pub(crate) fn ensure_target(
    exists: bool,
    entity_type: &'static str,
    id: impl Display,
) -> Result<(), UseCaseError> {
    if !exists {
        return Err(UseCaseError::not_found(entity_type, id));
    }
    Ok(())
}

/// An identifier referenced by a command must point at an existing entity.
pub(crate) fn ensure_reference(
    exists: bool,
    entity_type: &'static str,
    id: impl Display,
) -> Result<(), UseCaseError> {
    if !exists {
        tracing::debug!(entity_type, id = %id, "Rejected missing reference");
        return Err(UseCaseError::invalid_data(format!(
            "{} {} does not exist",
            entity_type, id
        )));
    }
    Ok(())
}

/// A name must be free before it is used.
pub(crate) fn ensure_name_free(
    available: bool,
    entity_type: &'static str,
    name: impl Display,
) -> Result<(), UseCaseError> {
    if !available {
        tracing::debug!(entity_type, name = %name, "Rejected taken name");
        return Err(UseCaseError::invalid_data(format!(
            "{} named '{}' already exists",
            entity_type, name
        )));
    }
    Ok(())
}
