use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::repositories::RepositoryError;

/// Errors that can abort an event's allocation
///
/// Capacity exhaustion and an empty free-athlete pool are not errors; they
/// silently terminate the current event's allocation.
#[derive(Debug, Error)]
pub enum AllocationError {
    #[error("Invariant violation while assembling a team: {0}")]
    Domain(#[from] DomainError),

    #[error("Failed to persist team: {0}")]
    Persistence(#[from] RepositoryError),
}

pub type AllocationResult<T> = Result<T, AllocationError>;
