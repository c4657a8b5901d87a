use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{
    token::TokenConfig,
    types::{AdminSession, AdminUser},
};
use crate::shared::AppError;

/// Authentication service the catalog delegates sign-in to
#[async_trait]
pub trait AuthProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminSession, AppError>;
    async fn sign_out(&self, token: &str) -> Result<(), AppError>;
    /// Returns the admin a token belongs to, or `None` if the token is unusable
    async fn current_user(&self, token: &str) -> Result<Option<AdminUser>, AppError>;
}

/// The single administrator identity
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: Option<String>, // Sign-in is disabled without a password
}

/// Issues signed tokens for the configured administrator
///
/// Signed-out session ids are remembered in memory so their tokens stop
/// working before they expire.
pub struct TokenAuthProvider {
    credentials: AdminCredentials,
    token_config: TokenConfig,
    revoked_sessions: RwLock<HashSet<String>>,
}

impl TokenAuthProvider {
    pub fn new(credentials: AdminCredentials, token_config: TokenConfig) -> Self {
        Self {
            credentials,
            token_config,
            revoked_sessions: RwLock::new(HashSet::new()),
        }
    }

    fn password_matches(&self, password: &str) -> bool {
        self.credentials
            .password
            .as_deref()
            .is_some_and(|expected| expected == password)
    }
}

#[async_trait]
impl AuthProvider for TokenAuthProvider {
    #[instrument(skip(self, password))]
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminSession, AppError> {
        if email != self.credentials.email || !self.password_matches(password) {
            warn!(email = %email, "Rejected admin sign-in");
            return Err(AppError::InvalidCredentials);
        }

        let session_id = Uuid::new_v4().to_string();
        let token = self.token_config.issue(&session_id, email)?;

        info!(email = %email, session_id = %session_id, "Admin signed in");

        Ok(AdminSession {
            token,
            user: AdminUser {
                email: email.to_string(),
            },
        })
    }

    #[instrument(skip(self, token))]
    async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let claims = self.token_config.verify(token).map_err(|e| {
            warn!(error = %e, "Sign-out with unusable token");
            AppError::Unauthorized("Invalid session token".to_string())
        })?;

        self.revoked_sessions
            .write()
            .await
            .insert(claims.session_id.clone());

        info!(session_id = %claims.session_id, "Admin session revoked");
        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn current_user(&self, token: &str) -> Result<Option<AdminUser>, AppError> {
        let claims = match self.token_config.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Token does not identify a user");
                return Ok(None);
            }
        };

        if self
            .revoked_sessions
            .read()
            .await
            .contains(&claims.session_id)
        {
            debug!(session_id = %claims.session_id, "Token belongs to a revoked session");
            return Ok(None);
        }

        if claims.email != self.credentials.email {
            warn!(email = %claims.email, "Token issued for a non-admin email");
            return Ok(None);
        }

        Ok(Some(AdminUser {
            email: claims.email,
        }))
    }
}
