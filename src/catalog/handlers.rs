use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Extension, Json,
};
use tracing::{info, instrument};

use super::{
    models::GameId,
    service::Confirmation,
    types::{AddGameRequest, CatalogQuery, CatalogResponse, DeleteQuery},
};
use crate::auth::{bearer_token, AdminSession};
use crate::shared::AppState;

/// HTTP handler for viewing the catalog
///
/// GET /games?sort=rating-high&q=zelda
/// Each request describes its own view: a missing `sort` means alphabetical
/// and a missing `q` means no filter.
#[instrument(name = "list_games", skip(state, headers))]
pub async fn list_games(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.restore_session(bearer_token(&headers)).await;

    catalog.set_sort(params.sort.unwrap_or_default());
    catalog.set_query(params.q.unwrap_or_default());

    let view = catalog.render();
    info!(card_count = view.cards.len(), "Catalog rendered");

    Json(CatalogResponse { view, notice: None })
}

/// HTTP handler for reloading the catalog from the store
///
/// POST /games/reload
#[instrument(name = "reload_games", skip(state, headers))]
pub async fn reload_games(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CatalogResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.restore_session(bearer_token(&headers)).await;

    let notice = catalog.load_all().await;

    Json(CatalogResponse {
        view: catalog.render(),
        notice,
    })
}

/// HTTP handler for adding a game
///
/// POST /games (admin only)
#[instrument(name = "add_game", skip(state, session, request))]
pub async fn add_game(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Json(request): Json<AddGameRequest>,
) -> Json<CatalogResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.attach_session(session);

    let notice = catalog.add(request).await;

    Json(CatalogResponse {
        view: catalog.render(),
        notice: Some(notice),
    })
}

/// HTTP handler for deleting a game
///
/// DELETE /games/:id?confirm=true (admin only)
#[instrument(name = "delete_game", skip(state, session))]
pub async fn delete_game(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
    Path(id): Path<String>,
    Query(params): Query<DeleteQuery>,
) -> Json<CatalogResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.attach_session(session);

    let notice = catalog
        .delete(&GameId::new(id), Confirmation::from(params.confirm))
        .await;

    Json(CatalogResponse {
        view: catalog.render(),
        notice,
    })
}
