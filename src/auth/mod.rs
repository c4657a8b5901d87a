// Public API - what other modules can use
pub use handlers::{current_session, sign_in, sign_out};
pub use middleware::{admin_auth, bearer_token};
pub use provider::{AdminCredentials, AuthProvider, TokenAuthProvider};
pub use token::TokenConfig;
pub use types::{AdminClaims, AdminSession, AdminUser};

// Internal modules
mod handlers;
mod middleware;
pub mod provider;
mod token;
pub mod types;
