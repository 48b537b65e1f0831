use std::path::PathBuf;

/// Runtime configuration for the seeding binary
///
/// Every field is read from the environment with a sensible default, so the
/// binary runs out of the box against a local SQLite file.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// Optional path to a JSON seed fixture; demo data is synthesized otherwise
    pub fixture_path: Option<PathBuf>,
    /// Optional fixed RNG seed for reproducible allocation runs
    pub rng_seed: Option<u64>,
    /// Upper bound for the per-event team count draw
    pub max_teams_per_event: u32,
    /// Probability of attaching a coach to a team
    pub coach_probability: f64,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// Recognized variables: `DATABASE_URL`, `SEED_FIXTURE`, `SEED_RNG`,
    /// `MAX_TEAMS_PER_EVENT`, `COACH_PROBABILITY`.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using default");
            "sqlite://sporthub-seed.db".to_string()
        });

        let fixture_path = std::env::var("SEED_FIXTURE").ok().map(PathBuf::from);

        let rng_seed = parse_var("SEED_RNG");
        let max_teams_per_event = parse_var("MAX_TEAMS_PER_EVENT").unwrap_or(10);
        let coach_probability = parse_var("COACH_PROBABILITY").unwrap_or(0.7);

        Self {
            database_url,
            fixture_path,
            rng_seed,
            max_teams_per_event,
            coach_probability,
        }
    }
}

/// Parses an optional environment variable, warning on malformed values
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring malformed {}: {:?}", name, raw);
            None
        }
    }
}
