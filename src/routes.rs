use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth;
use crate::catalog;
use crate::shared::AppState;

/// Builds the HTTP surface of the catalog
///
/// Adding, deleting and signing out go through the admin middleware; everything
/// else is public and picks up an optional bearer token itself.
pub fn app(state: AppState) -> Router {
    let admin_only = middleware::from_fn_with_state(state.clone(), auth::admin_auth);

    Router::new()
        .route(
            "/games",
            get(catalog::list_games).merge(post(catalog::add_game).route_layer(admin_only.clone())),
        )
        .route("/games/reload", post(catalog::reload_games))
        .route(
            "/games/:id",
            delete(catalog::delete_game).route_layer(admin_only.clone()),
        )
        .route(
            "/session",
            post(auth::sign_in)
                .get(auth::current_session)
                .merge(delete(auth::sign_out).route_layer(admin_only)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
