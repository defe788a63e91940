use std::env;

use crate::error::AuthError;

/// Identity provider settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Expected `iss` claim, e.g. `https://tenant.auth0.com/`.
    pub issuer: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// URL of the provider's JWKS document.
    pub jwks_uri: String,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    ///
    /// - `AUTH_ISSUER` - token issuer (required)
    /// - `AUTH_AUDIENCE` - token audience (required)
    /// - `AUTH_JWKS_URI` - JWKS document URL (defaults to the issuer's
    ///   `.well-known/jwks.json`)
    pub fn from_env() -> Result<Self, AuthError> {
        let issuer = env::var("AUTH_ISSUER")
            .map_err(|_| AuthError::Config("AUTH_ISSUER is not set".to_string()))?;
        let audience = env::var("AUTH_AUDIENCE")
            .map_err(|_| AuthError::Config("AUTH_AUDIENCE is not set".to_string()))?;
        let jwks_uri = env::var("AUTH_JWKS_URI").unwrap_or_else(|_| default_jwks_uri(&issuer));

        Ok(Self {
            issuer,
            audience,
            jwks_uri,
        })
    }
}

/// Derives the conventional JWKS location from the issuer URL.
fn default_jwks_uri(issuer: &str) -> String {
    format!("{}/.well-known/jwks.json", issuer.trim_end_matches('/'))
}
