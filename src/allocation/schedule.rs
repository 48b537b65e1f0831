use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::event::TimeWindow;

/// Busy-interval index for one allocation run
///
/// Maps each athlete to the `[start, end)` windows they are already committed
/// to. The index is working state scoped to a single batch run: it is passed
/// by reference into the allocator, mutated as teams are finalized, and never
/// persisted or shared across unrelated runs.
#[derive(Debug, Default)]
pub struct ScheduleIndex {
    busy: HashMap<Uuid, Vec<TimeWindow>>,
}

impl ScheduleIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an athlete has no committed window overlapping `window`
    pub fn is_free(&self, athlete_id: Uuid, window: &TimeWindow) -> bool {
        self.busy
            .get(&athlete_id)
            .map(|committed| !committed.iter().any(|w| w.overlaps(window)))
            .unwrap_or(true)
    }

    /// Records a new commitment for an athlete
    pub fn commit(&mut self, athlete_id: Uuid, window: TimeWindow) {
        self.busy.entry(athlete_id).or_default().push(window);
    }

    /// Filters a pool down to the athletes free for `window`, preserving order
    pub fn free_athletes(&self, pool: &[Uuid], window: &TimeWindow) -> Vec<Uuid> {
        pool.iter()
            .copied()
            .filter(|id| self.is_free(*id, window))
            .collect()
    }

    /// Returns the committed windows recorded for an athlete
    pub fn commitments(&self, athlete_id: Uuid) -> &[TimeWindow] {
        self.busy
            .get(&athlete_id)
            .map(|w| w.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn window(day: u32, start_hour: u32, end_hour: u32) -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2026, 4, day, start_hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 4, day, end_hour, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_athlete_is_free() {
        let index = ScheduleIndex::new();

        assert!(index.is_free(Uuid::new_v4(), &window(1, 9, 17)));
    }

    #[test]
    fn committed_athlete_blocks_overlapping_window() {
        let mut index = ScheduleIndex::new();
        let athlete = Uuid::new_v4();
        index.commit(athlete, window(1, 9, 17));

        assert!(!index.is_free(athlete, &window(1, 12, 20)));
    }

    #[test]
    fn committed_athlete_is_free_for_disjoint_window() {
        let mut index = ScheduleIndex::new();
        let athlete = Uuid::new_v4();
        index.commit(athlete, window(1, 9, 12));

        assert!(index.is_free(athlete, &window(1, 12, 15)));
        assert!(index.is_free(athlete, &window(2, 9, 12)));
    }

    #[test]
    fn free_athletes_filters_and_preserves_order() {
        let mut index = ScheduleIndex::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        index.commit(b, window(1, 9, 17));

        let free = index.free_athletes(&[a, b, c], &window(1, 10, 11));

        assert_eq!(free, vec![a, c]);
    }

    #[test]
    fn commitments_accumulate() {
        let mut index = ScheduleIndex::new();
        let athlete = Uuid::new_v4();
        index.commit(athlete, window(1, 9, 12));
        index.commit(athlete, window(2, 9, 12));

        assert_eq!(index.commitments(athlete).len(), 2);
        assert!(index.commitments(Uuid::new_v4()).is_empty());
    }
}
