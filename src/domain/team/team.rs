use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use super::events::TeamEvent;
use super::membership::TeamMembership;
use super::value_objects::MembershipStatus;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::Event;

/// Team aggregate root
///
/// Represents a group of athletes competing together in one event.
/// Enforces all business rules related to team composition.
///
/// # Invariants
/// - Name cannot be empty
/// - At least one member, at most the event's maximum team size
/// - Member athlete ids are pairwise distinct
/// - Exactly one member carries the leader flag
/// - A declined membership carries a non-empty comment, others carry none
///   (enforced by [`TeamMembership`])
///
/// Readiness is derived at assembly time: the member list is non-empty, the
/// number of approved members meets the event's minimum team size, a leader
/// exists, and a coach is assigned.
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    event_id: Uuid,
    name: String,
    members: Vec<TeamMembership>,
    coach_id: Option<Uuid>,
    is_ready: bool,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Assembles a new Team for an event
    ///
    /// # Arguments
    /// * `event` - The event the team competes in
    /// * `name` - Team display name (cannot be empty)
    /// * `members` - Ordered member list, exactly one of which leads
    /// * `coach_id` - Optional coach reference (coaches are not
    ///   schedule-checked; one coach may serve several teams)
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(DomainError)` - If any invariant is violated
    pub fn assemble(
        event: &Event,
        name: String,
        members: Vec<TeamMembership>,
        coach_id: Option<Uuid>,
    ) -> DomainResult<(Self, Vec<TeamEvent>)> {
        if name.is_empty() {
            return Err(DomainError::EmptyTeamName);
        }
        if members.is_empty() {
            return Err(DomainError::EmptyTeam);
        }
        if members.len() > event.max_team_size() as usize {
            return Err(DomainError::TeamTooLarge {
                count: members.len(),
                max: event.max_team_size(),
            });
        }

        let mut seen = HashSet::new();
        for member in &members {
            if !seen.insert(member.athlete_id()) {
                return Err(DomainError::DuplicateMember(member.athlete_id()));
            }
        }

        let leaders = members.iter().filter(|m| m.is_leader()).count();
        if leaders != 1 {
            return Err(DomainError::LeaderCount(leaders));
        }

        let is_ready = Self::compute_readiness(&members, coach_id, event.min_team_size());

        let team = Self {
            id: Uuid::new_v4(),
            event_id: event.id(),
            name,
            members,
            coach_id,
            is_ready,
            created_at: Utc::now(),
        };

        let mut events = vec![TeamEvent::Assembled {
            team_id: team.id,
            event_id: team.event_id,
            member_count: team.members.len(),
        }];
        if let Some(coach_id) = team.coach_id {
            events.push(TeamEvent::CoachAssigned {
                team_id: team.id,
                coach_id,
            });
        }

        Ok((team, events))
    }

    fn compute_readiness(
        members: &[TeamMembership],
        coach_id: Option<Uuid>,
        min_team_size: u32,
    ) -> bool {
        let approved = members
            .iter()
            .filter(|m| m.status() == MembershipStatus::Approved)
            .count();
        let has_leader = members.iter().any(|m| m.is_leader());

        !members.is_empty()
            && approved >= min_team_size as usize
            && has_leader
            && coach_id.is_some()
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the event this team competes in
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered member list
    pub fn members(&self) -> &[TeamMembership] {
        &self.members
    }

    /// Returns the leading member
    pub fn leader(&self) -> Option<&TeamMembership> {
        self.members.iter().find(|m| m.is_leader())
    }

    /// Iterates over the member athlete ids in order
    pub fn athlete_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.members.iter().map(|m| m.athlete_id())
    }

    /// Returns the attached coach if one was assigned
    pub fn coach_id(&self) -> Option<Uuid> {
        self.coach_id
    }

    /// Whether the team is ready to compete
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        event_id: Uuid,
        name: String,
        members: Vec<TeamMembership>,
        coach_id: Option<Uuid>,
        is_ready: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            event_id,
            name,
            members,
            coach_id,
            is_ready,
            created_at,
        }
    }
}
