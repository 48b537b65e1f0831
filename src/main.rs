use std::sync::Arc;

use sporthub_seeder::allocation::{RandomPolicy, TeamAllocator};
use sporthub_seeder::config::Config;
use sporthub_seeder::infrastructure::repositories::SqliteTeamRepository;
use sporthub_seeder::seed::{SeedData, SeedFixture};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env();

    // Load the fixture if one is configured, otherwise synthesize demo data
    let data = match &config.fixture_path {
        Some(path) => SeedFixture::from_path(path)
            .expect("Failed to read seed fixture")
            .into_seed_data()
            .expect("Seed fixture contains an invalid event"),
        None => {
            tracing::info!("SEED_FIXTURE not set, synthesizing demo data");
            SeedData::demo(48, 6)
        }
    };

    tracing::info!(
        events = data.events.len(),
        athletes = data.athletes.len(),
        coaches = data.coaches.len(),
        "Seed data loaded"
    );

    tracing::info!("Connecting to database...");
    let repository = SqliteTeamRepository::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected successfully");

    let policy = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed RNG seed");
            RandomPolicy::seeded(seed, config.coach_probability)
        }
        None => RandomPolicy::from_entropy(config.coach_probability),
    };

    let mut allocator = TeamAllocator::new(
        Arc::new(repository),
        policy,
        config.max_teams_per_event,
    );

    let report = allocator
        .run(&data.events, &data.athletes, &data.coaches)
        .await;

    for outcome in &report.events {
        if let Some(error) = &outcome.error {
            tracing::warn!(event = %outcome.event_name, %error, "allocation failed");
        }
    }

    tracing::info!(
        teams = report.teams_created(),
        members = report.members_placed(),
        failed_events = report.failed_events(),
        "Seeding run complete"
    );
}
