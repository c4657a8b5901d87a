use serde::{Deserialize, Serialize};

use crate::catalog::notice::Notice;

/// JWT claims carried by an admin token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminClaims {
    pub session_id: String,
    pub email: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

/// The signed-in administrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminUser {
    pub email: String,
}

/// A successful sign-in: the bearer token plus who it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
    pub user: AdminUser,
}

/// Request payload for signing in; the email is fixed server side
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub password: String,
}

/// Response for the session endpoints
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub token: Option<String>,
    pub email: Option<String>,
    pub notice: Option<Notice>,
}
