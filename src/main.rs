use std::sync::Arc;

use gamer_catalog::{
    routes, AppConfig, AppState, CatalogController, GameRepository, InMemoryGameRepository,
    PostgresGameRepository, TokenAuthProvider,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamer_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting game catalog server");

    let config = AppConfig::from_env();
    if config.admin_password.is_none() {
        warn!("ADMIN_PASSWORD is not set, admin sign-in is disabled");
    }

    // Same controller either way, only the store differs
    let game_repository: Arc<dyn GameRepository + Send + Sync> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url).await?;
            let repository = PostgresGameRepository::new(pool);
            repository.ensure_schema().await?;
            info!("Using PostgreSQL game store");
            Arc::new(repository)
        }
        None => {
            info!("DATABASE_URL not set, using in-memory game store");
            Arc::new(InMemoryGameRepository::new())
        }
    };

    let auth_provider = Arc::new(TokenAuthProvider::new(
        config.admin_credentials(),
        config.token_config(),
    ));

    let mut catalog = CatalogController::new(
        game_repository,
        auth_provider.clone(),
        config.admin_email.clone(),
    );
    if let Some(notice) = catalog.load_all().await {
        warn!(message = %notice.message, "Starting with an empty catalog");
    }

    let app = routes::app(AppState::new(catalog, auth_provider));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
