// Seed data module
// The data source side of an allocation run: fixture files and demo data

pub mod fixture;

pub use fixture::{FixtureError, SeedData, SeedFixture};
