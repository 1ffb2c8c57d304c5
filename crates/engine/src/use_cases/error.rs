//! Flat error taxonomy shared by every use case.

use std::fmt;

use grimoire_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Machine-checkable status of a `UseCaseError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    NotFound,
    InvalidData,
    Access,
    Idempotent,
    Policy,
    Internal,
}

impl ErrorStatus {
    /// HTTP status code the transport layer answers with.
    pub fn http_code(&self) -> u16 {
        match self {
            ErrorStatus::NotFound => 404,
            ErrorStatus::InvalidData | ErrorStatus::Idempotent => 400,
            ErrorStatus::Access | ErrorStatus::Policy => 403,
            ErrorStatus::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorStatus::NotFound => "not_found",
            ErrorStatus::InvalidData => "invalid_data",
            ErrorStatus::Access => "access",
            ErrorStatus::Idempotent => "idempotent",
            ErrorStatus::Policy => "policy",
            ErrorStatus::Internal => "internal",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Access denied: {0}")]
    Access(String),

    #[error("Idempotent change: {0}")]
    Idempotent(String),

    #[error("Policy violation: {0}")]
    Policy(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UseCaseError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn status(&self) -> ErrorStatus {
        match self {
            Self::NotFound { .. } => ErrorStatus::NotFound,
            Self::InvalidData(_) => ErrorStatus::InvalidData,
            Self::Access(_) => ErrorStatus::Access,
            Self::Idempotent(_) => ErrorStatus::Idempotent,
            Self::Policy(_) => ErrorStatus::Policy,
            Self::Internal(_) => ErrorStatus::Internal,
        }
    }
}

impl From<DomainError> for UseCaseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidData(msg) => Self::InvalidData(msg),
            DomainError::Idempotent(msg) => Self::Idempotent(msg),
        }
    }
}

impl From<RepoError> for UseCaseError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_http_codes() {
        let cases = [
            (UseCaseError::not_found("Class", "x"), 404),
            (UseCaseError::invalid_data("bad"), 400),
            (UseCaseError::Access("who?".into()), 403),
            (UseCaseError::Idempotent("same".into()), 400),
            (UseCaseError::Policy("no".into()), 403),
            (UseCaseError::Internal("boom".into()), 500),
        ];
        for (err, code) in cases {
            assert_eq!(err.status().http_code(), code, "{}", err);
        }
    }

    #[test]
    fn domain_errors_keep_their_kind() {
        let err: UseCaseError = DomainError::idempotent("name is already \"бард\"").into();
        assert_eq!(err.status(), ErrorStatus::Idempotent);

        let err: UseCaseError = DomainError::invalid_data("Name cannot be empty").into();
        assert_eq!(err.to_string(), "Invalid data: Name cannot be empty");
    }

    #[test]
    fn repo_not_found_stays_not_found_and_the_rest_is_internal() {
        let err: UseCaseError = RepoError::not_found("Weapon", "42").into();
        assert_eq!(err.status(), ErrorStatus::NotFound);

        let err: UseCaseError = RepoError::database("save", "disk full").into();
        assert_eq!(err.status(), ErrorStatus::Internal);
    }
}
