use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{MembershipStatus, Team, TeamMembership};

/// SQLite implementation of TeamRepository
///
/// Persists Team aggregates with their memberships. A `save` runs in one
/// transaction so a team and its members land (or fail) as a single logical
/// unit; member order is preserved through an explicit position column.
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Opens (creating if missing) the database at `url` and bootstraps the schema
    ///
    /// # Arguments
    /// * `url` - SQLite connection URL, e.g. `sqlite://seed.db` or `sqlite::memory:`
    pub async fn connect(url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| RepositoryError::Database(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        // One pinned connection: the allocator is a sequential batch pass,
        // and in-memory databases exist per connection
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(db_err)?;

        let repository = Self { pool };
        repository.init_schema().await?;
        Ok(repository)
    }

    async fn init_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS teams (
                id TEXT PRIMARY KEY,
                event_id TEXT NOT NULL,
                name TEXT NOT NULL,
                coach_id TEXT,
                is_ready INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS team_members (
                team_id TEXT NOT NULL REFERENCES teams(id) ON DELETE CASCADE,
                athlete_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                is_leader INTEGER NOT NULL,
                status TEXT NOT NULL,
                comment TEXT,
                PRIMARY KEY (team_id, athlete_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn load_members(&self, team_id: Uuid) -> Result<Vec<TeamMembership>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT athlete_id, is_leader, status, comment
            FROM team_members
            WHERE team_id = ?1
            ORDER BY position
            "#,
        )
        .bind(team_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut members = Vec::with_capacity(rows.len());
        for row in rows {
            let athlete_id: String = row.try_get("athlete_id").map_err(db_err)?;
            let is_leader: bool = row.try_get("is_leader").map_err(db_err)?;
            let status: String = row.try_get("status").map_err(db_err)?;
            let comment: Option<String> = row.try_get("comment").map_err(db_err)?;

            members.push(TeamMembership::from_persistence(
                parse_uuid(&athlete_id)?,
                is_leader,
                status
                    .parse::<MembershipStatus>()
                    .map_err(RepositoryError::Corrupted)?,
                comment,
            ));
        }

        Ok(members)
    }

    async fn hydrate_team(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Team, RepositoryError> {
        let id: String = row.try_get("id").map_err(db_err)?;
        let event_id: String = row.try_get("event_id").map_err(db_err)?;
        let name: String = row.try_get("name").map_err(db_err)?;
        let coach_id: Option<String> = row.try_get("coach_id").map_err(db_err)?;
        let is_ready: bool = row.try_get("is_ready").map_err(db_err)?;
        let created_at: String = row.try_get("created_at").map_err(db_err)?;

        let team_id = parse_uuid(&id)?;
        let members = self.load_members(team_id).await?;

        Ok(Team::from_persistence(
            team_id,
            parse_uuid(&event_id)?,
            name,
            members,
            coach_id.as_deref().map(parse_uuid).transpose()?,
            is_ready,
            parse_timestamp(&created_at)?,
        ))
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, event_id, name, coach_id, is_ready, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                coach_id = excluded.coach_id,
                is_ready = excluded.is_ready
            "#,
        )
        .bind(team.id().to_string())
        .bind(team.event_id().to_string())
        .bind(team.name())
        .bind(team.coach_id().map(|id| id.to_string()))
        .bind(team.is_ready())
        .bind(team.created_at().to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;

        // Replace the member list wholesale so an upsert cannot leave
        // stale members behind
        sqlx::query("DELETE FROM team_members WHERE team_id = ?1")
            .bind(team.id().to_string())
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        for (position, member) in team.members().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO team_members (team_id, athlete_id, position, is_leader, status, comment)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(team.id().to_string())
            .bind(member.athlete_id().to_string())
            .bind(position as i64)
            .bind(member.is_leader())
            .bind(member.status().as_str())
            .bind(member.comment())
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, event_id, name, coach_id, is_ready, created_at FROM teams WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        match row {
            Some(row) => Ok(Some(self.hydrate_team(&row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, event_id, name, coach_id, is_ready, created_at
            FROM teams
            WHERE event_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(event_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let mut teams = Vec::with_capacity(rows.len());
        for row in &rows {
            teams.push(self.hydrate_team(row).await?);
        }

        Ok(teams)
    }
}

fn db_err(error: sqlx::Error) -> RepositoryError {
    RepositoryError::Database(error.to_string())
}

fn parse_uuid(text: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(text)
        .map_err(|e| RepositoryError::Corrupted(format!("Invalid uuid '{}': {}", text, e)))
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Corrupted(format!("Invalid timestamp '{}': {}", text, e)))
}
