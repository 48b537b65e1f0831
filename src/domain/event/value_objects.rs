use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Half-open `[start, end)` time range of an event or commitment
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use sporthub_seeder::domain::event::TimeWindow;
///
/// let a = TimeWindow::new(
///     Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 1, 17, 0, 0).unwrap(),
/// )
/// .expect("valid window");
/// let b = TimeWindow::new(
///     Utc.with_ymd_and_hms(2026, 3, 1, 17, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap(),
/// )
/// .expect("valid window");
///
/// // Touching endpoints do not overlap
/// assert!(!a.overlaps(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window
    ///
    /// # Returns
    /// * `Ok(TimeWindow)` - If `start` is strictly before `end`
    /// * `Err(DomainError)` - Otherwise
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::InvalidTimeWindow);
        }
        Ok(Self { start, end })
    }

    /// Returns the inclusive start of the window
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end of the window
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Checks whether two half-open windows overlap
    ///
    /// `[a0, a1)` and `[b0, b1)` overlap iff `a0 < b1 && b0 < a1`.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}
