use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::auth::AuthProvider;
use crate::catalog::service::CatalogController;

/// Everything a request handler needs
///
/// The controller is shared by all requests and locked for the duration of one.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Mutex<CatalogController>>,
    pub auth_provider: Arc<dyn AuthProvider + Send + Sync>,
}

impl AppState {
    pub fn new(
        catalog: CatalogController,
        auth_provider: Arc<dyn AuthProvider + Send + Sync>,
    ) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            auth_provider,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidCredentials | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
