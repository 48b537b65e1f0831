// Team allocation engine
//
// One sequential batch pass over an ordered list of events: for each event,
// free athletes are drawn into teams under capacity and schedule-conflict
// constraints, and every team is persisted together with its memberships.

pub mod allocator;
pub mod errors;
pub mod policy;
pub mod schedule;

// Re-export main types
pub use allocator::{AllocationReport, EventOutcome, TeamAllocator};
pub use errors::{AllocationError, AllocationResult};
pub use policy::{AllocationPolicy, RandomPolicy};
pub use schedule::ScheduleIndex;
