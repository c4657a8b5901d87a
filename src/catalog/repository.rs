use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::models::{GameId, GameRecord, NewGame};
use crate::rating::{CategoryRatings, Rating};
use crate::shared::AppError;

/// Trait for game storage operations
///
/// Implementations must return games newest first and assign the id and
/// creation timestamp themselves.
#[async_trait]
pub trait GameRepository {
    async fn fetch_all(&self) -> Result<Vec<GameRecord>, AppError>;
    async fn insert(&self, game: &NewGame) -> Result<GameRecord, AppError>;
    async fn delete(&self, id: &GameId) -> Result<(), AppError>;
}

/// In-memory document store for development and testing
///
/// Games get UUID v4 identifiers, like documents in a hosted document
/// database. Data is lost when the process exits.
pub struct InMemoryGameRepository {
    games: RwLock<Vec<GameRecord>>, // Newest first
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            games: RwLock::new(Vec::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated games
    pub fn with_games(mut games: Vec<GameRecord>) -> Self {
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self {
            games: RwLock::new(games),
        }
    }

    /// Returns the current number of stored games
    pub async fn game_count(&self) -> usize {
        self.games.read().await.len()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<GameRecord>, AppError> {
        let games = self.games.read().await;
        debug!(game_count = games.len(), "Fetched games from memory");
        Ok(games.clone())
    }

    #[instrument(skip(self, game), fields(name = %game.name))]
    async fn insert(&self, game: &NewGame) -> Result<GameRecord, AppError> {
        let record = GameRecord::from_new(
            GameId::new(Uuid::new_v4().to_string()),
            game.clone(),
            Utc::now(),
        );

        self.games.write().await.insert(0, record.clone());

        debug!(game_id = %record.id, "Game stored in memory");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &GameId) -> Result<(), AppError> {
        let mut games = self.games.write().await;
        let position = games.iter().position(|game| &game.id == id).ok_or_else(|| {
            warn!(game_id = %id, "Game not found for deletion in memory");
            AppError::NotFound("Game not found".to_string())
        })?;
        games.remove(position);

        debug!(game_id = %id, "Game deleted from memory");
        Ok(())
    }
}

const GAME_COLUMNS: &str = "id::text AS id, name, image_url, gameplay_rating, graphics_rating, \
     audio_rating, atmosphere_rating, satisfaction_rating, total_rating, usage_hours, added_by, \
     created_at";

/// PostgreSQL implementation of the game repository
///
/// One row per game with a column per category rating.
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the games table if it doesn't exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS games (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                image_url TEXT NOT NULL,
                gameplay_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                graphics_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                audio_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                atmosphere_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                satisfaction_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                total_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
                usage_hours DOUBLE PRECISION,
                added_by TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create games table");
            AppError::Storage(e.to_string())
        })?;

        debug!("Games table is ready");
        Ok(())
    }
}

/// A `games` row as stored, before any clean-up
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub gameplay_rating: f64,
    pub graphics_rating: f64,
    pub audio_rating: f64,
    pub atmosphere_rating: f64,
    pub satisfaction_rating: f64,
    pub total_rating: f64,
    pub usage_hours: Option<f64>,
    pub added_by: String,
    pub created_at: DateTime<Utc>,
}

impl GameRow {
    /// Rows written by other clients may hold out-of-range ratings; those read
    /// as 0 and the total is recomputed from what is left.
    pub fn into_record(self) -> GameRecord {
        let ratings = CategoryRatings {
            gameplay: Rating::or_zero(self.gameplay_rating),
            graphics: Rating::or_zero(self.graphics_rating),
            audio: Rating::or_zero(self.audio_rating),
            atmosphere: Rating::or_zero(self.atmosphere_rating),
            satisfaction: Rating::or_zero(self.satisfaction_rating),
        };
        let total_rating = ratings.total();

        if self.total_rating != total_rating {
            warn!(
                game_id = %self.id,
                stored_total = self.total_rating,
                total_rating,
                "Stored total disagrees with category ratings, using recomputed total"
            );
        }

        GameRecord {
            id: GameId::new(self.id),
            name: self.name,
            image_url: self.image_url,
            ratings,
            total_rating,
            created_at: self.created_at,
            usage_hours: self.usage_hours,
            added_by: self.added_by,
        }
    }
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<GameRecord>, AppError> {
        debug!("Fetching games from database");

        let rows = sqlx::query_as::<_, GameRow>(&format!(
            "SELECT {} FROM games ORDER BY created_at DESC, id DESC",
            GAME_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch games from database");
            AppError::Storage(e.to_string())
        })?;

        let games: Vec<GameRecord> = rows.into_iter().map(GameRow::into_record).collect();
        debug!(game_count = games.len(), "Fetched games from database");
        Ok(games)
    }

    #[instrument(skip(self, game), fields(name = %game.name))]
    async fn insert(&self, game: &NewGame) -> Result<GameRecord, AppError> {
        debug!("Inserting game into database");

        let row = sqlx::query(
            "INSERT INTO games (name, image_url, gameplay_rating, graphics_rating, audio_rating, \
             atmosphere_rating, satisfaction_rating, total_rating, usage_hours, added_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id::text AS id, created_at",
        )
        .bind(&game.name)
        .bind(&game.image_url)
        .bind(game.ratings.gameplay.value())
        .bind(game.ratings.graphics.value())
        .bind(game.ratings.audio.value())
        .bind(game.ratings.atmosphere.value())
        .bind(game.ratings.satisfaction.value())
        .bind(game.total_rating)
        .bind(game.usage_hours)
        .bind(&game.added_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert game into database");
            AppError::Storage(e.to_string())
        })?;

        let record = GameRecord::from_new(
            GameId::new(row.get::<String, _>("id")),
            game.clone(),
            row.get("created_at"),
        );

        debug!(game_id = %record.id, "Game inserted into database");
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &GameId) -> Result<(), AppError> {
        debug!(game_id = %id, "Deleting game from database");

        let result = sqlx::query("DELETE FROM games WHERE id::text = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, game_id = %id, "Failed to delete game from database");
                AppError::Storage(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            warn!(game_id = %id, "Game not found for deletion");
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        debug!(game_id = %id, "Game deleted from database");
        Ok(())
    }
}
