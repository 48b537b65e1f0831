use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::errors::{AllocationError, AllocationResult};
use super::policy::AllocationPolicy;
use super::schedule::ScheduleIndex;
use crate::domain::event::Event;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamMembership};

/// Outcome of one event's allocation within a batch run
#[derive(Debug)]
pub struct EventOutcome {
    pub event_id: Uuid,
    pub event_name: String,
    pub teams_created: usize,
    pub members_placed: usize,
    pub error: Option<AllocationError>,
}

/// Summary of a whole batch run
#[derive(Debug, Default)]
pub struct AllocationReport {
    pub events: Vec<EventOutcome>,
}

impl AllocationReport {
    /// Total teams created across all events
    pub fn teams_created(&self) -> usize {
        self.events.iter().map(|e| e.teams_created).sum()
    }

    /// Total members placed across all events
    pub fn members_placed(&self) -> usize {
        self.events.iter().map(|e| e.members_placed).sum()
    }

    /// Number of events whose allocation was aborted by an error
    pub fn failed_events(&self) -> usize {
        self.events.iter().filter(|e| e.error.is_some()).count()
    }
}

/// Conflict-aware team allocator
///
/// Given an event's time window and capacity constraints plus shared athlete
/// and coach pools, synthesizes teams whose members are not double-booked
/// across overlapping events, designates exactly one leader per team, and
/// persists each team with its memberships as a single logical unit.
///
/// The allocator runs as a sequential batch pass: one [`ScheduleIndex`] is
/// threaded through all events of a run, so earlier events get first pick of
/// the shared pool.
pub struct TeamAllocator<P: AllocationPolicy> {
    repository: Arc<dyn TeamRepository>,
    policy: P,
    max_teams_per_event: u32,
}

impl<P: AllocationPolicy> TeamAllocator<P> {
    /// Creates a new allocator
    ///
    /// # Arguments
    /// * `repository` - Persistence sink for assembled teams
    /// * `policy` - Source of every stochastic decision
    /// * `max_teams_per_event` - Upper bound for the per-event team count draw
    pub fn new(repository: Arc<dyn TeamRepository>, policy: P, max_teams_per_event: u32) -> Self {
        Self {
            repository,
            policy,
            max_teams_per_event,
        }
    }

    /// Allocates teams for a single event
    ///
    /// Implements one allocation pass: compute the free-athlete pool for the
    /// event's window, draw a requested team count, then form teams until the
    /// request is met or capacity or free athletes run out. Each team is
    /// persisted before its members' busy intervals are committed to the
    /// schedule index.
    ///
    /// # Returns
    /// * `Ok(Vec<Team>)` - The created teams; empty when no athlete was free
    /// * `Err(AllocationError)` - A persistence failure; teams persisted
    ///   before the failure remain persisted, the rest of this event's
    ///   allocation is abandoned without retry
    pub async fn allocate_event(
        &mut self,
        event: &Event,
        athletes: &[Uuid],
        coaches: &[Uuid],
        schedule: &mut ScheduleIndex,
    ) -> AllocationResult<Vec<Team>> {
        let window = event.window();
        let mut free = schedule.free_athletes(athletes, &window);
        let mut remaining = event.max_participants() as usize;
        let mut teams = Vec::new();

        // The request is drawn independently of remaining capacity; running
        // out of capacity or athletes ends the pass early, it is not an error.
        let requested = self.policy.team_count(self.max_teams_per_event);
        debug!(
            event = %event.name(),
            requested,
            free = free.len(),
            "starting event allocation"
        );

        for ordinal in 1..=requested {
            if remaining < event.min_team_size() as usize || free.is_empty() {
                break;
            }

            let max_feasible = (event.max_team_size() as usize)
                .min(remaining)
                .min(free.len());
            if max_feasible < 1 {
                break;
            }
            // Clamped to 1 so a team is never impossible to form solely
            // because the configured minimum exceeds availability.
            let min_feasible = 1.max((event.min_team_size() as usize).min(max_feasible));

            let size = self.policy.team_size(min_feasible, max_feasible);
            let picked = self.policy.draw_members(&mut free, size);
            let leader = self.policy.leader_index(picked.len());

            let mut members = Vec::with_capacity(picked.len());
            for (index, athlete_id) in picked.iter().enumerate() {
                let status = self.policy.membership_status();
                let comment = status
                    .requires_comment()
                    .then(|| self.policy.decline_comment());
                members.push(TeamMembership::new(
                    *athlete_id,
                    index == leader,
                    status,
                    comment,
                )?);
            }

            let coach_id = self.policy.coach_for_team(coaches);
            let name = format!("{} Team {}", event.name(), ordinal);
            let (team, events) = Team::assemble(event, name, members, coach_id)?;

            self.repository.save(&team).await?;

            for domain_event in &events {
                debug!(?domain_event, "team event");
            }

            for athlete_id in team.athlete_ids() {
                schedule.commit(athlete_id, window);
            }

            remaining -= team.members().len();
            teams.push(team);

            if remaining == 0 {
                break;
            }
        }

        Ok(teams)
    }

    /// Runs the batch pass over a set of events
    ///
    /// Events are processed in ascending start-time order regardless of the
    /// order they are supplied in, so earlier events get first pick of the
    /// shared athlete pool. A per-event failure aborts only that event's
    /// remaining allocation; the run continues with the next event.
    pub async fn run(
        &mut self,
        events: &[Event],
        athletes: &[Uuid],
        coaches: &[Uuid],
    ) -> AllocationReport {
        let mut ordered: Vec<&Event> = events.iter().collect();
        ordered.sort_by_key(|event| event.start());

        let mut schedule = ScheduleIndex::new();
        let mut report = AllocationReport::default();

        for event in ordered {
            match self
                .allocate_event(event, athletes, coaches, &mut schedule)
                .await
            {
                Ok(teams) => {
                    let members_placed = teams.iter().map(|t| t.members().len()).sum();
                    info!(
                        event = %event.name(),
                        teams = teams.len(),
                        members = members_placed,
                        "event allocated"
                    );
                    report.events.push(EventOutcome {
                        event_id: event.id(),
                        event_name: event.name().to_string(),
                        teams_created: teams.len(),
                        members_placed,
                        error: None,
                    });
                }
                Err(error) => {
                    warn!(event = %event.name(), %error, "event allocation aborted");
                    report.events.push(EventOutcome {
                        event_id: event.id(),
                        event_name: event.name().to_string(),
                        teams_created: 0,
                        members_placed: 0,
                        error: Some(error),
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::policy::RandomPolicy;
    use crate::infrastructure::repositories::InMemoryTeamRepository;
    use chrono::{TimeZone, Utc};

    fn event(name: &str, day: u32, min: u32, max: u32, capacity: u32) -> Event {
        Event::new(
            name.to_string(),
            Utc.with_ymd_and_hms(2026, 7, day, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 7, day, 18, 0, 0).unwrap(),
            min,
            max,
            capacity,
        )
        .unwrap()
    }

    fn pool(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[tokio::test]
    async fn no_free_athletes_yields_no_teams() {
        let repository = Arc::new(InMemoryTeamRepository::new());
        let mut allocator =
            TeamAllocator::new(repository, RandomPolicy::seeded(3, 0.5), 10);

        let target = event("Morning Heats", 4, 2, 4, 10);
        let athletes = pool(6);

        // Book every athlete into an overlapping window beforehand
        let mut schedule = ScheduleIndex::new();
        for id in &athletes {
            schedule.commit(*id, target.window());
        }

        let teams = allocator
            .allocate_event(&target, &athletes, &[], &mut schedule)
            .await
            .unwrap();

        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn capacity_bounds_total_members() {
        let repository = Arc::new(InMemoryTeamRepository::new());
        let mut allocator =
            TeamAllocator::new(repository, RandomPolicy::seeded(11, 0.5), 10);

        let target = event("Club Open", 5, 2, 4, 7);
        let athletes = pool(30);
        let mut schedule = ScheduleIndex::new();

        let teams = allocator
            .allocate_event(&target, &athletes, &[], &mut schedule)
            .await
            .unwrap();

        let total: usize = teams.iter().map(|t| t.members().len()).sum();
        assert!(total <= 7);
    }

    #[tokio::test]
    async fn minimum_clamps_to_one_when_pool_is_short() {
        let repository = Arc::new(InMemoryTeamRepository::new());
        let mut allocator =
            TeamAllocator::new(repository, RandomPolicy::seeded(5, 0.0), 1);

        // Nominal minimum of 3, but only one athlete is available
        let target = event("Sparse Qualifier", 6, 3, 5, 20);
        let athletes = pool(1);
        let mut schedule = ScheduleIndex::new();

        let teams = allocator
            .allocate_event(&target, &athletes, &[], &mut schedule)
            .await
            .unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].members().len(), 1);
        assert!(teams[0].leader().is_some());
    }

    #[tokio::test]
    async fn selected_members_are_committed_to_the_schedule() {
        let repository = Arc::new(InMemoryTeamRepository::new());
        let mut allocator =
            TeamAllocator::new(repository, RandomPolicy::seeded(9, 0.5), 4);

        let target = event("River Sprint", 8, 2, 4, 12);
        let athletes = pool(12);
        let mut schedule = ScheduleIndex::new();

        let teams = allocator
            .allocate_event(&target, &athletes, &[], &mut schedule)
            .await
            .unwrap();

        assert!(!teams.is_empty());
        for team in &teams {
            for athlete_id in team.athlete_ids() {
                assert!(!schedule.is_free(athlete_id, &target.window()));
            }
        }
    }
}
