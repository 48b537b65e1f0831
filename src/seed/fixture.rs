use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::event::Event;

/// Errors raised while loading a seed fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid event record: {0}")]
    Invalid(#[from] DomainError),
}

/// One event record as it appears in a fixture file
#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub min_team_size: u32,
    pub max_team_size: u32,
    pub max_participants: u32,
}

/// Seed fixture document
///
/// JSON shape:
/// ```json
/// {
///   "events": [
///     {
///       "name": "Spring Regatta",
///       "start": "2026-05-10T08:00:00Z",
///       "end": "2026-05-12T20:00:00Z",
///       "min_team_size": 2,
///       "max_team_size": 4,
///       "max_participants": 10
///     }
///   ],
///   "athletes": ["<uuid>", "..."],
///   "coaches": ["<uuid>", "..."]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SeedFixture {
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub athletes: Vec<Uuid>,
    #[serde(default)]
    pub coaches: Vec<Uuid>,
}

impl SeedFixture {
    /// Loads and parses a fixture file
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses a fixture from a JSON string
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates every event record into a domain event
    pub fn into_seed_data(self) -> Result<SeedData, FixtureError> {
        let mut events = Vec::with_capacity(self.events.len());
        for record in self.events {
            events.push(Event::new(
                record.name,
                record.start,
                record.end,
                record.min_team_size,
                record.max_team_size,
                record.max_participants,
            )?);
        }

        Ok(SeedData {
            events,
            athletes: self.athletes,
            coaches: self.coaches,
        })
    }
}

/// Validated inputs for one allocation run
#[derive(Debug)]
pub struct SeedData {
    pub events: Vec<Event>,
    pub athletes: Vec<Uuid>,
    pub coaches: Vec<Uuid>,
}

impl SeedData {
    /// Synthesizes a demo dataset when no fixture is configured
    ///
    /// Produces a mix of overlapping and disjoint event windows around the
    /// current time so conflict checking is actually exercised.
    pub fn demo(athlete_count: usize, coach_count: usize) -> Self {
        let base = Utc::now();
        let day = |n: i64| base + Duration::days(n);

        let events = vec![
            Event::new(
                "Regional Qualifier".to_string(),
                day(7),
                day(9),
                2,
                4,
                16,
            )
            .expect("demo event is valid"),
            // Overlaps the qualifier on purpose
            Event::new(
                "City Sprint".to_string(),
                day(8),
                day(10),
                2,
                5,
                12,
            )
            .expect("demo event is valid"),
            Event::new(
                "Harbor Relay".to_string(),
                day(14),
                day(15),
                3,
                6,
                18,
            )
            .expect("demo event is valid"),
            Event::new(
                "Winter Invitational".to_string(),
                day(30),
                day(33),
                2,
                4,
                10,
            )
            .expect("demo event is valid"),
        ];

        Self {
            events,
            athletes: (0..athlete_count).map(|_| Uuid::new_v4()).collect(),
            coaches: (0..coach_count).map(|_| Uuid::new_v4()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "events": [
            {
                "name": "Spring Regatta",
                "start": "2026-05-10T08:00:00Z",
                "end": "2026-05-12T20:00:00Z",
                "min_team_size": 2,
                "max_team_size": 4,
                "max_participants": 10
            }
        ],
        "athletes": ["7f2c1fbe-3a61-4a2e-9f3b-8f6d7f1f5a10"],
        "coaches": []
    }"#;

    #[test]
    fn parses_valid_fixture() {
        let data = SeedFixture::from_json(FIXTURE)
            .unwrap()
            .into_seed_data()
            .unwrap();

        assert_eq!(data.events.len(), 1);
        assert_eq!(data.events[0].name(), "Spring Regatta");
        assert_eq!(data.athletes.len(), 1);
        assert!(data.coaches.is_empty());
    }

    #[test]
    fn missing_pools_default_to_empty() {
        let json = r#"{ "events": [] }"#;
        let data = SeedFixture::from_json(json)
            .unwrap()
            .into_seed_data()
            .unwrap();

        assert!(data.athletes.is_empty());
        assert!(data.coaches.is_empty());
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(SeedFixture::from_json("not json {").is_err());
    }

    #[test]
    fn invalid_event_record_is_rejected() {
        let json = r#"{
            "events": [
                {
                    "name": "Backwards",
                    "start": "2026-05-12T20:00:00Z",
                    "end": "2026-05-10T08:00:00Z",
                    "min_team_size": 2,
                    "max_team_size": 4,
                    "max_participants": 10
                }
            ]
        }"#;

        let result = SeedFixture::from_json(json).unwrap().into_seed_data();

        assert!(result.is_err());
    }

    #[test]
    fn demo_data_has_overlapping_windows() {
        let data = SeedData::demo(24, 4);

        assert_eq!(data.athletes.len(), 24);
        assert_eq!(data.coaches.len(), 4);
        let overlapping = data.events.iter().enumerate().any(|(i, a)| {
            data.events
                .iter()
                .skip(i + 1)
                .any(|b| a.window().overlaps(&b.window()))
        });
        assert!(overlapping);
    }
}
