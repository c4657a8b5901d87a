use tracing::warn;

use crate::auth::{AdminCredentials, TokenConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ADMIN_EMAIL: &str = "admin@fernle.com";
const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_SESSION_EXPIRATION_DAYS: i64 = 7;
const MAX_SESSION_EXPIRATION_DAYS: i64 = 3650;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub admin_email: String,
    pub admin_password: Option<String>,
    pub jwt_secret: String,
    pub session_expiration_days: i64,
    /// Selects the PostgreSQL store when set, the in-memory store otherwise
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let session_expiration_days = match get("SESSION_EXPIRATION_DAYS") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid SESSION_EXPIRATION_DAYS, using default");
                DEFAULT_SESSION_EXPIRATION_DAYS
            }),
            None => DEFAULT_SESSION_EXPIRATION_DAYS,
        };
        let clamped_days = session_expiration_days.clamp(1, MAX_SESSION_EXPIRATION_DAYS);
        if clamped_days != session_expiration_days {
            warn!(
                requested = session_expiration_days,
                clamped = clamped_days,
                "SESSION_EXPIRATION_DAYS out of range, clamping"
            );
        }

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin_email: get("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: get("ADMIN_PASSWORD"),
            jwt_secret: get("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            session_expiration_days: clamped_days,
            database_url: get("DATABASE_URL"),
        }
    }

    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.jwt_secret.clone(), self.session_expiration_days)
    }

    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials {
            email: self.admin_email.clone(),
            password: self.admin_password.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
