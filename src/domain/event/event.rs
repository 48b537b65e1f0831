use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::TimeWindow;
use crate::domain::errors::{DomainError, DomainResult};

/// Event aggregate root
///
/// Represents one scheduled competition with a registration window and
/// team-size constraints. Teams are allocated against events; events
/// themselves are supplied by the data source and never persisted here.
///
/// # Invariants
/// - Name cannot be empty
/// - The time window ends after it starts
/// - `1 <= min_team_size <= max_team_size`
/// - `max_participants >= 1`
#[derive(Debug, Clone)]
pub struct Event {
    id: Uuid,
    name: String,
    window: TimeWindow,
    min_team_size: u32,
    max_team_size: u32,
    max_participants: u32,
}

impl Event {
    /// Creates a new Event aggregate
    ///
    /// # Arguments
    /// * `name` - Display name of the competition (cannot be empty)
    /// * `start` / `end` - The event's half-open `[start, end)` window
    /// * `min_team_size` / `max_team_size` - Nominal team-size bounds
    /// * `max_participants` - Cap on total allocated members across all teams
    ///
    /// # Returns
    /// * `Ok(Event)` - New event with a fresh id
    /// * `Err(DomainError)` - If any invariant is violated
    pub fn new(
        name: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        min_team_size: u32,
        max_team_size: u32,
        max_participants: u32,
    ) -> DomainResult<Self> {
        if name.is_empty() {
            return Err(DomainError::EmptyEventName);
        }
        let window = TimeWindow::new(start, end)?;
        if min_team_size < 1 || max_team_size < min_team_size {
            return Err(DomainError::InvalidSizeBounds {
                min: min_team_size,
                max: max_team_size,
            });
        }
        if max_participants < 1 {
            return Err(DomainError::InvalidCapacity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            window,
            min_team_size,
            max_team_size,
            max_participants,
        })
    }

    /// Returns the event's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the event's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event's `[start, end)` window
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Returns the start of the event window
    pub fn start(&self) -> DateTime<Utc> {
        self.window.start()
    }

    /// Returns the end of the event window
    pub fn end(&self) -> DateTime<Utc> {
        self.window.end()
    }

    /// Returns the nominal minimum team size
    pub fn min_team_size(&self) -> u32 {
        self.min_team_size
    }

    /// Returns the maximum team size
    pub fn max_team_size(&self) -> u32 {
        self.max_team_size
    }

    /// Returns the cap on total allocated members for this event
    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bounds() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2026, 5, 10, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 5, 12, 20, 0, 0).unwrap(),
        )
    }

    #[test]
    fn create_event_with_valid_fields() {
        let (start, end) = bounds();
        let event = Event::new("Spring Regatta".to_string(), start, end, 2, 4, 10).unwrap();

        assert_eq!(event.name(), "Spring Regatta");
        assert_eq!(event.start(), start);
        assert_eq!(event.end(), end);
        assert_eq!(event.min_team_size(), 2);
        assert_eq!(event.max_team_size(), 4);
        assert_eq!(event.max_participants(), 10);
    }

    #[test]
    fn create_event_with_empty_name_fails() {
        let (start, end) = bounds();
        let result = Event::new("".to_string(), start, end, 2, 4, 10);

        assert!(result.is_err());
    }

    #[test]
    fn create_event_with_inverted_window_fails() {
        let (start, end) = bounds();
        let result = Event::new("Spring Regatta".to_string(), end, start, 2, 4, 10);

        assert!(result.is_err());
    }

    #[test]
    fn create_event_with_zero_min_team_size_fails() {
        let (start, end) = bounds();
        let result = Event::new("Spring Regatta".to_string(), start, end, 0, 4, 10);

        assert!(result.is_err());
    }

    #[test]
    fn create_event_with_max_below_min_fails() {
        let (start, end) = bounds();
        let result = Event::new("Spring Regatta".to_string(), start, end, 5, 4, 10);

        assert!(result.is_err());
    }

    #[test]
    fn create_event_with_zero_capacity_fails() {
        let (start, end) = bounds();
        let result = Event::new("Spring Regatta".to_string(), start, end, 2, 4, 0);

        assert!(result.is_err());
    }

    #[test]
    fn events_get_distinct_ids() {
        let (start, end) = bounds();
        let a = Event::new("A".to_string(), start, end, 1, 4, 10).unwrap();
        let b = Event::new("B".to_string(), start, end, 1, 4, 10).unwrap();

        assert_ne!(a.id(), b.id());
    }
}
