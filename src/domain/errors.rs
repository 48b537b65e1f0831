use thiserror::Error;

/// Errors raised when a domain invariant is violated
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Event name cannot be empty")]
    EmptyEventName,

    #[error("Time window must end after it starts")]
    InvalidTimeWindow,

    #[error("Invalid team size bounds: min {min}, max {max}")]
    InvalidSizeBounds { min: u32, max: u32 },

    #[error("Participant capacity must be at least 1")]
    InvalidCapacity,

    #[error("Team name cannot be empty")]
    EmptyTeamName,

    #[error("Team must have at least one member")]
    EmptyTeam,

    #[error("Team of {count} members exceeds the maximum team size {max}")]
    TeamTooLarge { count: usize, max: u32 },

    #[error("Team must have exactly one leader, found {0}")]
    LeaderCount(usize),

    #[error("Athlete {0} appears more than once in the same team")]
    DuplicateMember(uuid::Uuid),

    #[error("Declined membership requires a non-empty comment")]
    MissingDeclineComment,

    #[error("Only declined memberships may carry a comment")]
    UnexpectedComment,
}

pub type DomainResult<T> = Result<T, DomainError>;
