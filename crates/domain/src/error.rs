//! Unified error types for the domain layer
//!
//! Domain code only ever rejects input for two reasons: the data breaks an
//! invariant, or the caller asked for a change that changes nothing. Every
//! other failure (missing rows, authorization) belongs to the engine.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input violates an invariant or a cross-field rule
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Mutation would leave the aggregate unchanged
    #[error("Idempotent change: {0}")]
    Idempotent(String),
}

/// Result alias used by every validating constructor and mutator.
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Creates an invalid-data error for invariant violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::invalid_data("Name cannot be empty"));
    /// }
    /// ```
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Creates an idempotent-change error for no-op mutations.
    pub fn idempotent(msg: impl Into<String>) -> Self {
        Self::Idempotent(msg.into())
    }

    /// Check if this is an invalid-data error.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, Self::InvalidData(_))
    }

    /// Check if this is an idempotent-change error.
    pub fn is_idempotent(&self) -> bool {
        matches!(self, Self::Idempotent(_))
    }
}
