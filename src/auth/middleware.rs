use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::{info, instrument, warn};

use super::types::AdminSession;
use crate::shared::{AppError, AppState};

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Lets a request through only when it carries the admin's bearer token.
///
/// The verified [`AdminSession`] is added to the request extensions for the
/// handler to pick up with `Extension<AdminSession>`.
#[instrument(skip_all, fields(uri = %req.uri()))]
pub async fn admin_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        warn!("Request without a bearer token");
        return Err(AppError::Unauthorized("Missing bearer token".to_string()));
    };

    let Some(user) = state.auth_provider.current_user(&token).await? else {
        warn!("Bearer token does not belong to the admin");
        return Err(AppError::Unauthorized("Admin access required".to_string()));
    };

    info!(email = %user.email, "Admin request authorized");
    req.extensions_mut().insert(AdminSession { token, user });

    Ok(next.run(req).await)
}
