// Repository interfaces (ports)
// Implemented by the infrastructure layer

pub mod team_repository;

pub use team_repository::{RepositoryError, TeamRepository};
