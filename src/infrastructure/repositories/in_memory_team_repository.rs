use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::Team;

/// In-memory implementation of TeamRepository
///
/// Backs tests and database-free allocation runs. Teams are stored by id in
/// insertion order behind an async lock; `save` is insert-or-update like the
/// database-backed implementation.
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
    index: RwLock<HashMap<Uuid, usize>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored teams
    pub async fn len(&self) -> usize {
        self.teams.read().await.len()
    }

    /// Whether the repository holds no teams
    pub async fn is_empty(&self) -> bool {
        self.teams.read().await.is_empty()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let mut teams = self.teams.write().await;
        let mut index = self.index.write().await;

        match index.get(&team.id()) {
            Some(&position) => teams[position] = team.clone(),
            None => {
                index.insert(team.id(), teams.len());
                teams.push(team.clone());
            }
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let teams = self.teams.read().await;
        let index = self.index.read().await;

        Ok(index.get(&id).map(|&position| teams[position].clone()))
    }

    async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<Team>, RepositoryError> {
        let teams = self.teams.read().await;

        Ok(teams
            .iter()
            .filter(|team| team.event_id() == event_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Event;
    use crate::domain::team::{MembershipStatus, TeamMembership};
    use chrono::{TimeZone, Utc};

    fn sample_event() -> Event {
        Event::new(
            "Harbor Cup".to_string(),
            Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 8, 2, 18, 0, 0).unwrap(),
            1,
            4,
            12,
        )
        .unwrap()
    }

    fn sample_team(event: &Event, name: &str) -> Team {
        let members = vec![
            TeamMembership::new(Uuid::new_v4(), true, MembershipStatus::Approved, None).unwrap(),
            TeamMembership::new(Uuid::new_v4(), false, MembershipStatus::Pending, None).unwrap(),
        ];
        Team::assemble(event, name.to_string(), members, None)
            .unwrap()
            .0
    }

    #[tokio::test]
    async fn save_and_find_by_id() {
        let repository = InMemoryTeamRepository::new();
        let event = sample_event();
        let team = sample_team(&event, "Harbor Cup Team 1");

        repository.save(&team).await.unwrap();

        let found = repository.find_by_id(team.id()).await.unwrap().unwrap();
        assert_eq!(found.id(), team.id());
        assert_eq!(found.members().len(), 2);
    }

    #[tokio::test]
    async fn find_missing_team_returns_none() {
        let repository = InMemoryTeamRepository::new();

        assert!(repository.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_twice_updates_in_place() {
        let repository = InMemoryTeamRepository::new();
        let event = sample_event();
        let team = sample_team(&event, "Harbor Cup Team 1");

        repository.save(&team).await.unwrap();
        repository.save(&team).await.unwrap();

        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn find_by_event_filters_other_events() {
        let repository = InMemoryTeamRepository::new();
        let first = sample_event();
        let second = sample_event();

        repository
            .save(&sample_team(&first, "Harbor Cup Team 1"))
            .await
            .unwrap();
        repository
            .save(&sample_team(&first, "Harbor Cup Team 2"))
            .await
            .unwrap();
        repository
            .save(&sample_team(&second, "Harbor Cup Team 1"))
            .await
            .unwrap();

        assert_eq!(repository.find_by_event(first.id()).await.unwrap().len(), 2);
        assert_eq!(
            repository.find_by_event(second.id()).await.unwrap().len(),
            1
        );
    }
}
