//! JWKS-backed token verification.
//!
//! Verifies RS256 access tokens against the identity provider's
//! published key set, enforcing issuer and audience. The `email` claim
//! becomes the owner identity used throughout the service.

use std::collections::HashMap;

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::verifier::{Identity, TokenVerifier};

/// Claims extracted from the access token.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
}

/// Token verifier backed by the identity provider's published key set.
///
/// Decoding keys are cached by key id. A token signed with a key id not
/// in the cache triggers a single refresh of the JWKS document before
/// the token is rejected; key rotation at the provider is picked up
/// without restarting the service.
pub struct JwksVerifier {
    config: AuthConfig,
    http: reqwest::Client,
    keys: RwLock<HashMap<String, DecodingKey>>,
}

impl JwksVerifier {
    /// Creates a verifier for the given provider configuration.
    ///
    /// The key cache starts empty and is filled on first use.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves a decoding key by key id, refreshing the cached key set
    /// once if the id is unknown.
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey> {
        if let Some(key) = self.keys.read().await.get(kid) {
            return Ok(key.clone());
        }

        self.refresh_keys().await?;

        self.keys
            .read()
            .await
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownKey(kid.to_string()))
    }

    /// Fetches the JWKS document and replaces the cached key set.
    async fn refresh_keys(&self) -> Result<()> {
        let jwks: JwkSet = self
            .http
            .get(&self.config.jwks_uri)
            .send()
            .await
            .map_err(|e| AuthError::Jwks(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::Jwks(e.to_string()))?
            .json()
            .await
            .map_err(|e| AuthError::Jwks(e.to_string()))?;

        let mut keys = HashMap::new();
        for jwk in &jwks.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };

            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(err) => {
                    tracing::warn!(kid = %kid, error = %err, "Skipping unusable JWK");
                }
            }
        }

        tracing::debug!(count = keys.len(), "Refreshed JWKS key cache");

        *self.keys.write().await = keys;
        Ok(())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.config.audience.as_str()]);
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }
}

#[async_trait]
impl TokenVerifier for JwksVerifier {
    async fn verify(&self, token: &str) -> Result<Identity> {
        let header = decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("token header has no key id".to_string()))?;

        let key = self.decoding_key(&kid).await?;

        let data = decode::<Claims>(token, &key, &self.validation())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let email = data.claims.email.ok_or(AuthError::MissingClaim("email"))?;

        Ok(Identity {
            subject: data.claims.sub,
            email,
        })
    }
}
