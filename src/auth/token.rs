use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, instrument};

use super::types::AdminClaims;
use crate::shared::AppError;

/// Signs and verifies admin session tokens (HS256)
#[derive(Clone)]
pub struct TokenConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    pub expiration_days: i64,
}

impl TokenConfig {
    pub fn new(secret: impl AsRef<[u8]>, expiration_days: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation,
            expiration_days,
        }
    }

    /// Issues a token for one admin session
    #[instrument(skip(self, email))]
    pub fn issue(&self, session_id: &str, email: &str) -> Result<String, AppError> {
        let issued_at = Utc::now();
        let expires_at = Duration::try_days(self.expiration_days)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                debug!(expiration_days = self.expiration_days, "Token lifetime out of range");
                AppError::InvalidToken(format!(
                    "session lifetime of {} days is out of range",
                    self.expiration_days
                ))
            })?;

        let claims = AdminClaims {
            session_id: session_id.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp() as usize,
            iat: issued_at.timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            debug!(error = %e, "Could not sign admin token");
            AppError::InvalidToken(e.to_string())
        })
    }

    /// Checks signature and expiry, returning the claims
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        let data = decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Admin token rejected");
                AppError::InvalidToken(e.to_string())
            })?;

        debug!(session_id = %data.claims.session_id, "Admin token verified");
        Ok(data.claims)
    }
}
