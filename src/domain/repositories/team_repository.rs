use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::team::Team;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams. A team and its
/// memberships are saved as a single logical unit; a failed save leaves no
/// partial team behind. Implementations handle storage-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team with all of its memberships (insert or update)
    async fn save(&self, team: &Team) -> Result<(), RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// Find all teams allocated for an event
    async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<Team>, RepositoryError>;
}
