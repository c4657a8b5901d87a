use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    card,
    models::{GameId, GameRecord, ImageSource, NewGame},
    notice::Notice,
    repository::GameRepository,
    types::{AddGameRequest, CatalogView},
    view::{view, SearchQuery, SortKey},
};
use crate::auth::{AdminSession, AuthProvider};
use crate::rating::CategoryRatings;
use crate::shared::AppError;

/// Whether the user confirmed a destructive action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Owns the cached catalog and the current view state.
///
/// Every user action ends in a [`Notice`]; store and auth failures are logged
/// and reported without touching the cache.
pub struct CatalogController {
    repository: Arc<dyn GameRepository + Send + Sync>,
    auth_provider: Arc<dyn AuthProvider + Send + Sync>,
    admin_email: String,
    games: Vec<GameRecord>, // Newest first, as the store returns them
    sort: SortKey,
    query: SearchQuery,
    session: Option<AdminSession>,
}

impl CatalogController {
    pub fn new(
        repository: Arc<dyn GameRepository + Send + Sync>,
        auth_provider: Arc<dyn AuthProvider + Send + Sync>,
        admin_email: String,
    ) -> Self {
        Self {
            repository,
            auth_provider,
            admin_email,
            games: Vec::new(),
            sort: SortKey::default(),
            query: SearchQuery::default(),
            session: None,
        }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn search_query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    /// Replaces the cache with the store contents and resets the view
    #[instrument(skip(self))]
    pub async fn load_all(&mut self) -> Option<Notice> {
        match self.repository.fetch_all().await {
            Ok(games) => {
                info!(game_count = games.len(), "Catalog loaded");
                self.games = games;
                self.sort = SortKey::default();
                self.query = SearchQuery::default();
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to load games");
                Some(Notice::error("Error loading games from database"))
            }
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add(&mut self, request: AddGameRequest) -> Notice {
        let Some(session) = &self.session else {
            warn!("Add attempted without admin session");
            return Notice::error("Admin access required");
        };

        let new_game = match validate_new_game(request, &session.user.email) {
            Ok(game) => game,
            Err(e) => {
                let message = match e {
                    AppError::Validation(message) => message,
                    other => other.to_string(),
                };
                warn!(reason = %message, "Rejected game submission");
                return Notice::error(message);
            }
        };

        match self.repository.insert(&new_game).await {
            Ok(record) => {
                info!(
                    game_id = %record.id,
                    total_rating = record.total_rating,
                    "Game added"
                );
                self.games.insert(0, record);
                Notice::success("Game added successfully!")
            }
            Err(e) => {
                warn!(error = %e, "Failed to add game");
                Notice::error("Error adding game to database")
            }
        }
    }

    /// Deletes a game once the user has confirmed.
    ///
    /// A declined confirmation does nothing and produces no notice.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: &GameId, confirmation: Confirmation) -> Option<Notice> {
        if !self.is_admin() {
            warn!(game_id = %id, "Delete attempted without admin session");
            return Some(Notice::error("Admin access required"));
        }

        if confirmation == Confirmation::Declined {
            debug!(game_id = %id, "Deletion not confirmed");
            return None;
        }

        let notice = match self.repository.delete(id).await {
            Ok(()) => {
                self.games.retain(|game| &game.id != id);
                info!(game_id = %id, "Game deleted");
                Notice::success("Game deleted successfully!")
            }
            Err(e) => {
                warn!(error = %e, game_id = %id, "Failed to delete game");
                Notice::error(format!("Error deleting game: {}", e))
            }
        };
        Some(notice)
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        debug!(sort = %sort, "Sort changed");
        self.sort = sort;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        debug!(query = %self.query.as_str(), "Search query changed");
    }

    /// Projects the cache through the current sort and query
    pub fn render(&self) -> CatalogView {
        let is_admin = self.is_admin();
        let cards = view(&self.games, self.sort, &self.query)
            .into_iter()
            .map(|game| card::format(game, is_admin))
            .collect();

        CatalogView {
            cards,
            is_empty: self.games.is_empty(),
            sort: self.sort,
            query: self.query.clone(),
            is_admin,
        }
    }

    #[instrument(skip(self, password))]
    pub async fn sign_in(&mut self, password: &str) -> Notice {
        match self
            .auth_provider
            .sign_in_with_password(&self.admin_email, password)
            .await
        {
            Ok(session) => {
                info!(email = %session.user.email, "Admin access granted");
                self.session = Some(session);
                Notice::success("Admin access granted!")
            }
            Err(e) => {
                warn!(error = %e, "Admin sign-in failed");
                Notice::error("Invalid credentials!")
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&mut self) -> Notice {
        let Some(session) = self.session.take() else {
            return Notice::warning("Not signed in");
        };

        match self.auth_provider.sign_out(&session.token).await {
            Ok(()) => {
                info!(email = %session.user.email, "Admin logged out");
                Notice::success("Logged out successfully!")
            }
            Err(e) => {
                warn!(error = %e, "Logout failed");
                self.session = Some(session);
                Notice::error("Error logging out")
            }
        }
    }

    /// Looks up who `token` belongs to and sets the admin flag accordingly
    #[instrument(skip(self, token))]
    pub async fn restore_session(&mut self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            self.session = None;
            return false;
        };

        self.session = match self.auth_provider.current_user(token).await {
            Ok(Some(user)) if user.email == self.admin_email => Some(AdminSession {
                token: token.to_string(),
                user,
            }),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "Current user lookup failed");
                None
            }
        };

        self.is_admin()
    }

    /// Adopts a session that was already verified upstream
    pub fn attach_session(&mut self, session: AdminSession) {
        self.session = Some(session);
    }
}

fn validate_new_game(request: AddGameRequest, added_by: &str) -> Result<NewGame, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Please enter a game name!".to_string()));
    }

    let image = request
        .image
        .as_deref()
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .ok_or_else(|| AppError::Validation("Please provide a game image!".to_string()))?;

    if !ImageSource::classify(image).is_image() {
        return Err(AppError::Validation(
            "Only image files can be used as a game image".to_string(),
        ));
    }

    if let Some(hours) = request.usage_hours {
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::Validation(
                "Usage hours cannot be negative".to_string(),
            ));
        }
    }

    Ok(NewGame::new(
        name.to_string(),
        image.to_string(),
        CategoryRatings::from_map(&request.ratings),
        request.usage_hours,
        added_by.to_string(),
    ))
}
