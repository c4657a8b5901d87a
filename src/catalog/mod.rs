// Public API - what other modules can use
pub use handlers::{add_game, delete_game, list_games, reload_games};
pub use service::{CatalogController, Confirmation};

// Internal modules
pub mod card;
mod handlers;
pub mod models;
pub mod notice;
pub mod repository;
pub mod service;
pub mod types;
pub mod view;
