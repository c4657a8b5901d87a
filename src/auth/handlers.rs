use axum::{extract::State, http::HeaderMap, Extension, Json};
use tracing::{info, instrument};

use super::{
    middleware::bearer_token,
    types::{AdminSession, SessionResponse, SignInRequest},
};
use crate::shared::AppState;

/// HTTP handler for signing in as the administrator
///
/// POST /session
/// Returns a bearer token on success; a notice either way
#[instrument(name = "sign_in", skip(state, request))]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Json<SessionResponse> {
    let mut catalog = state.catalog.lock().await;
    let notice = catalog.sign_in(&request.password).await;

    let session = catalog.session().filter(|_| !notice.is_error()).cloned();
    info!(signed_in = session.is_some(), "Sign-in handled");

    Json(SessionResponse {
        token: session.as_ref().map(|s| s.token.clone()),
        email: session.map(|s| s.user.email),
        notice: Some(notice),
    })
}

/// HTTP handler for looking up the current user
///
/// GET /session
#[instrument(name = "current_session", skip(state, headers))]
pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.restore_session(bearer_token(&headers)).await;

    let session = catalog.session().cloned();
    Json(SessionResponse {
        token: None,
        email: session.map(|s| s.user.email),
        notice: None,
    })
}

/// HTTP handler for signing out
///
/// DELETE /session (admin only)
#[instrument(name = "sign_out", skip(state, session))]
pub async fn sign_out(
    State(state): State<AppState>,
    Extension(session): Extension<AdminSession>,
) -> Json<SessionResponse> {
    let mut catalog = state.catalog.lock().await;
    catalog.attach_session(session);
    let notice = catalog.sign_out().await;

    Json(SessionResponse {
        token: None,
        email: None,
        notice: Some(notice),
    })
}
