//! HTTP Controller - The inbound adapter
//!
//! ```text
//! routes.rs   - route table, auth gate placement, tracing layer
//! handlers.rs - one async fn per route
//! auth.rs     - bearer-token middleware
//! error.rs    - ApiError and its mapping to status codes
//! ```
//!
//! Handlers stay thin: decode, call [`ArticleService`], encode.

mod auth;
mod error;
mod handlers;
mod routes;

use std::sync::Arc;

use articles_usecase::ArticleService;
use secrecy::{ExposeSecret, SecretString};

pub use auth::require_bearer;
pub use error::ApiError;
pub use routes::router;

/// The bearer token mutating routes require
#[derive(Clone)]
pub struct ApiToken(Arc<SecretString>);

impl ApiToken {
    pub fn new(token: SecretString) -> Self {
        Self(Arc::new(token))
    }

    /// Compare without returning early on the first differing byte
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = self.0.expose_secret().as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl core::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("ApiToken([REDACTED])")
    }
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub api_token: ApiToken,
}

impl AppState {
    pub fn new(articles: ArticleService, api_token: ApiToken) -> Self {
        Self {
            articles,
            api_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches() {
        let token = ApiToken::new(SecretString::from("s3cret".to_string()));

        assert!(token.matches("s3cret"));
        assert!(!token.matches("s3creT"));
        assert!(!token.matches("s3cre"));
        assert!(!token.matches(""));
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = ApiToken::new(SecretString::from("s3cret".to_string()));
        assert_eq!(format!("{:?}", token), "ApiToken([REDACTED])");
    }
}
