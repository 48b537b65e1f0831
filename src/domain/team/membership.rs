use uuid::Uuid;

use super::value_objects::MembershipStatus;
use crate::domain::errors::{DomainError, DomainResult};

/// One athlete's membership in a team
///
/// Carries the leader flag and the approval status. A declined membership
/// must carry a non-empty comment; other statuses must not carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMembership {
    athlete_id: Uuid,
    leader: bool,
    status: MembershipStatus,
    comment: Option<String>,
}

impl TeamMembership {
    /// Creates a new membership
    ///
    /// # Returns
    /// * `Ok(TeamMembership)` - If the status/comment pairing is valid
    /// * `Err(DomainError)` - A declined membership without a comment, an
    ///   empty comment, or a comment on a non-declined membership
    pub fn new(
        athlete_id: Uuid,
        leader: bool,
        status: MembershipStatus,
        comment: Option<String>,
    ) -> DomainResult<Self> {
        match (&comment, status.requires_comment()) {
            (None, true) => return Err(DomainError::MissingDeclineComment),
            (Some(text), true) if text.trim().is_empty() => {
                return Err(DomainError::MissingDeclineComment)
            }
            (Some(_), false) => return Err(DomainError::UnexpectedComment),
            _ => {}
        }

        Ok(Self {
            athlete_id,
            leader,
            status,
            comment,
        })
    }

    /// Returns the member's athlete ID
    pub fn athlete_id(&self) -> Uuid {
        self.athlete_id
    }

    /// Whether this member is the team leader
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    /// Returns the membership's approval status
    pub fn status(&self) -> MembershipStatus {
        self.status
    }

    /// Returns the decline comment if one is present
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Reconstructs a membership from persistence layer data
    ///
    /// Bypasses validation; only to be used by repository implementations.
    pub fn from_persistence(
        athlete_id: Uuid,
        leader: bool,
        status: MembershipStatus,
        comment: Option<String>,
    ) -> Self {
        Self {
            athlete_id,
            leader,
            status,
            comment,
        }
    }
}
