// Library crate for the game catalog service
// This file exposes the public API for integration tests

pub mod auth;
pub mod catalog;
pub mod config;
pub mod rating;
pub mod routes;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use auth::{AuthProvider, TokenAuthProvider};
pub use catalog::{
    card::CardDescription,
    models::{GameId, GameRecord},
    repository::{GameRepository, InMemoryGameRepository, PostgresGameRepository},
    CatalogController, Confirmation,
};
pub use config::AppConfig;
pub use shared::{AppError, AppState};
