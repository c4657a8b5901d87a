use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

use gamer_catalog::{
    auth::{AdminCredentials, TokenConfig},
    catalog::{models::NewGame, notice::Notice, types::AddGameRequest, view::SortKey},
    rating::{Category, CategoryRatings, Rating},
    CatalogController, Confirmation, GameId, GameRecord, TokenAuthProvider,
};

use super::mocks::MockGameRepository;

pub const ADMIN_EMAIL: &str = "admin@fernle.com";
pub const ADMIN_PASSWORD: &str = "letmein";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub controller: CatalogController,
    pub repository: MockGameRepository,
}

pub struct TestSetupBuilder {
    games: Vec<GameRecord>,
    signed_in: bool,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            games: vec![],
            signed_in: false,
        }
    }

    /// Seeds the store with `(name, uniform category rating)` pairs, oldest first
    pub fn with_games(mut self, games: Vec<(&str, f64)>) -> Self {
        let count = games.len() as i64;
        self.games = games
            .into_iter()
            .enumerate()
            .map(|(i, (name, rating))| stored_game(name, rating, count - i as i64))
            .collect();
        self
    }

    pub fn signed_in(mut self) -> Self {
        self.signed_in = true;
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository = MockGameRepository::with_games(self.games);
        let auth_provider = Arc::new(TokenAuthProvider::new(
            AdminCredentials {
                email: ADMIN_EMAIL.to_string(),
                password: Some(ADMIN_PASSWORD.to_string()),
            },
            TokenConfig::new("integration-secret", 1),
        ));

        let mut controller = CatalogController::new(
            Arc::new(repository.clone()),
            auth_provider,
            ADMIN_EMAIL.to_string(),
        );
        controller.load_all().await;

        if self.signed_in {
            let notice = controller.sign_in(ADMIN_PASSWORD).await;
            assert!(!notice.is_error(), "Test admin should be able to sign in");
        }

        TestSetup {
            controller,
            repository,
        }
    }
}

impl TestSetup {
    pub async fn add_game(&mut self, name: &str, image: &str, rating: f64) -> Notice {
        let ratings: HashMap<String, f64> = Category::iter()
            .map(|category| (category.key().to_string(), rating))
            .collect();

        self.controller
            .add(AddGameRequest {
                name: name.to_string(),
                image: Some(image.to_string()),
                ratings,
                usage_hours: None,
            })
            .await
    }

    /// Confirmed deletes always report back
    pub async fn confirm_delete(&mut self, name: &str) -> Notice {
        let id = self.id_of(name);
        self.controller
            .delete(&id, Confirmation::Confirmed)
            .await
            .expect("a confirmed delete should produce a notice")
    }

    pub fn id_of(&self, name: &str) -> GameId {
        self.controller
            .games()
            .iter()
            .find(|game| game.name == name)
            .map(|game| game.id.clone())
            .unwrap_or_else(|| panic!("{} should be in the catalog", name))
    }

    pub fn visible_names(&self) -> Vec<String> {
        self.controller
            .render()
            .cards
            .into_iter()
            .map(|card| card.name)
            .collect()
    }

    pub fn show(&mut self, sort: SortKey, query: &str) -> Vec<String> {
        self.controller.set_sort(sort);
        self.controller.set_query(query);
        self.visible_names()
    }
}

fn stored_game(name: &str, rating: f64, minutes_ago: i64) -> GameRecord {
    let rating = Rating::new(rating).unwrap_or(Rating::ZERO);
    let new_game = NewGame::new(
        name.to_string(),
        "https://images.example.com/cover.png".to_string(),
        CategoryRatings::uniform(rating),
        None,
        ADMIN_EMAIL.to_string(),
    );
    GameRecord::from_new(
        GameId::new(format!("seed-{}", name.to_lowercase())),
        new_game,
        Utc::now() - Duration::minutes(minutes_ago),
    )
}
