use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::domain::team::MembershipStatus;

/// Comments attached to declined membership requests
const DECLINE_COMMENTS: &[&str] = &[
    "Recovering from an injury, sitting this one out",
    "Clashes with a club training camp",
    "Medical clearance still pending",
    "Asked to be placed with a different team",
    "Travel to the venue is not possible that week",
];

/// Strategy for every stochastic decision of an allocation run
///
/// The allocator itself is deterministic given a policy; all randomness
/// (team counts, sizes, member draws, statuses, coach attachment) lives
/// behind this trait so tests can substitute seeded or scripted outcomes.
pub trait AllocationPolicy {
    /// Number of teams to attempt for one event, in `1..=max_teams`
    ///
    /// Deliberately independent of remaining capacity; the allocator may
    /// terminate early and produce fewer teams than requested.
    fn team_count(&mut self, max_teams: u32) -> u32;

    /// Team size drawn from the feasible `[min, max]` range
    fn team_size(&mut self, min: usize, max: usize) -> usize;

    /// Draws `count` distinct athletes from `free`, removing them from it
    ///
    /// Callers guarantee `count` is at least 1 and at most `free.len()`.
    fn draw_members(&mut self, free: &mut Vec<Uuid>, count: usize) -> Vec<Uuid>;

    /// Index of the leading member within a team of `member_count`
    fn leader_index(&mut self, member_count: usize) -> usize;

    /// Approval status for one membership, drawn independently per member
    fn membership_status(&mut self) -> MembershipStatus;

    /// Non-empty comment for a declined membership
    fn decline_comment(&mut self) -> String;

    /// Optional coach for one team
    ///
    /// Coaches are never schedule-checked; the same coach may serve several
    /// teams across overlapping events.
    fn coach_for_team(&mut self, coaches: &[Uuid]) -> Option<Uuid>;
}

/// RNG-backed policy
///
/// Generic over the random source so tests can seed it. Member draws use a
/// shuffled-candidate list rather than rejection probing, keeping the cost
/// bounded and the outcome reproducible under a seeded generator.
pub struct RandomPolicy<R: Rng> {
    rng: R,
    coach_probability: f64,
}

impl RandomPolicy<StdRng> {
    /// Creates a reproducible policy from a fixed seed
    pub fn seeded(seed: u64, coach_probability: f64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), coach_probability)
    }

    /// Creates a policy seeded from the operating system
    pub fn from_entropy(coach_probability: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), coach_probability)
    }
}

impl<R: Rng> RandomPolicy<R> {
    /// Wraps an arbitrary random source
    pub fn with_rng(rng: R, coach_probability: f64) -> Self {
        Self {
            rng,
            coach_probability: coach_probability.clamp(0.0, 1.0),
        }
    }
}

impl<R: Rng> AllocationPolicy for RandomPolicy<R> {
    fn team_count(&mut self, max_teams: u32) -> u32 {
        self.rng.gen_range(1..=max_teams.max(1))
    }

    fn team_size(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    fn draw_members(&mut self, free: &mut Vec<Uuid>, count: usize) -> Vec<Uuid> {
        free.shuffle(&mut self.rng);
        free.split_off(free.len() - count)
    }

    fn leader_index(&mut self, member_count: usize) -> usize {
        self.rng.gen_range(0..member_count)
    }

    fn membership_status(&mut self) -> MembershipStatus {
        match self.rng.gen_range(0..3) {
            0 => MembershipStatus::Pending,
            1 => MembershipStatus::Approved,
            _ => MembershipStatus::Declined,
        }
    }

    fn decline_comment(&mut self) -> String {
        let index = self.rng.gen_range(0..DECLINE_COMMENTS.len());
        DECLINE_COMMENTS[index].to_string()
    }

    fn coach_for_team(&mut self, coaches: &[Uuid]) -> Option<Uuid> {
        if coaches.is_empty() || !self.rng.gen_bool(self.coach_probability) {
            return None;
        }
        coaches.choose(&mut self.rng).copied()
    }
}
