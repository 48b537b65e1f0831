// Infrastructure layer module
// Contains persistence adapters implementing domain repository interfaces
// Follows Hexagonal Architecture

pub mod repositories;
