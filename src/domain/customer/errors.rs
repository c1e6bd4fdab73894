use crate::shared::{EntityId, ValidationError};

// ============================================================================
// Customer Service Errors
// ============================================================================
//
// The aggregate itself only ever raises ValidationError. The errors below
// belong to the orchestration layer (command handler) and the persistence
// port it talks to.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Customer not found: {0}")]
    NotFound(EntityId),

    #[error("Concurrency conflict on customer {id}: expected version {expected}, but current is {actual}")]
    Conflict {
        id: EntityId,
        expected: i64,
        actual: i64,
    },

    #[error("Identity assignment failed: {0}")]
    Identity(#[from] ValidationError),

    #[error("Repository backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CustomerServiceError {
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CustomerServiceError::Validation(e) => Some(e),
            CustomerServiceError::Repository(_) => None,
        }
    }
}
