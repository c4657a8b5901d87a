use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use gamer_catalog::{
    catalog::models::NewGame, AppError, GameId, GameRecord, GameRepository,
    InMemoryGameRepository,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// In-memory store that counts calls and can be switched into a failing mode
#[derive(Clone)]
pub struct MockGameRepository {
    inner: Arc<InMemoryGameRepository>,
    failing: Arc<AtomicBool>,
    fetch_calls: Arc<AtomicUsize>,
    insert_calls: Arc<AtomicUsize>,
    delete_calls: Arc<AtomicUsize>,
}

impl MockGameRepository {
    pub fn new() -> Self {
        Self::with_games(Vec::new())
    }

    pub fn with_games(games: Vec<GameRecord>) -> Self {
        Self {
            inner: Arc::new(InMemoryGameRepository::with_games(games)),
            failing: Arc::new(AtomicBool::new(false)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
            insert_calls: Arc::new(AtomicUsize::new(0)),
            delete_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub async fn stored_count(&self) -> usize {
        self.inner.game_count().await
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Storage("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl GameRepository for MockGameRepository {
    async fn fetch_all(&self) -> Result<Vec<GameRecord>, AppError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.inner.fetch_all().await
    }

    async fn insert(&self, game: &NewGame) -> Result<GameRecord, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.inner.insert(game).await
    }

    async fn delete(&self, id: &GameId) -> Result<(), AppError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.inner.delete(id).await
    }
}
