//! Errors raised by repository adapters.

/// Failure of a repository call.
///
/// A missing row on `get` is not an error (ports return `Option`); only
/// `delete` of an absent row reports `NotFound`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The backing store could not complete `operation`.
    #[error("Storage failure in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
