use uuid::Uuid;

/// Domain events that occur within the Team aggregate
///
/// These events represent the moments of an allocation run worth surfacing
/// to logging and auditing; teams are created once and not mutated by this
/// crate afterward, so the set is small.
#[derive(Debug, Clone)]
pub enum TeamEvent {
    /// Fired when a team is assembled for an event
    Assembled {
        /// ID of the newly assembled team
        team_id: Uuid,
        /// Event the team competes in
        event_id: Uuid,
        /// Number of members placed on the team
        member_count: usize,
    },
    /// Fired when a coach is attached to a team
    CoachAssigned {
        /// ID of the team
        team_id: Uuid,
        /// Coach attached to the team
        coach_id: Uuid,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Assembled { team_id, .. } => *team_id,
            TeamEvent::CoachAssigned { team_id, .. } => *team_id,
        }
    }
}
