use async_trait::async_trait;

use crate::error::Result;

/// The authenticated caller, as asserted by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable subject identifier (`sub` claim).
    pub subject: String,
    /// Email address; used as the owner key for all stored resources.
    pub email: String,
}

/// Verifies bearer tokens and resolves them to an identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Identity>;
}

#[cfg(feature = "mock")]
mod mock {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::error::{AuthError, Result};

    use super::{Identity, TokenVerifier};

    /// Token verifier for tests: resolves tokens from a fixed table.
    #[derive(Debug, Default)]
    pub struct MockVerifier {
        tokens: HashMap<String, Identity>,
    }

    impl MockVerifier {
        /// Creates an empty verifier that rejects every token.
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a token that resolves to the given email.
        pub fn with_token(mut self, token: impl Into<String>, email: impl Into<String>) -> Self {
            let email = email.into();
            self.tokens.insert(
                token.into(),
                Identity {
                    subject: format!("mock|{email}"),
                    email,
                },
            );
            self
        }
    }

    #[async_trait]
    impl TokenVerifier for MockVerifier {
        async fn verify(&self, token: &str) -> Result<Identity> {
            self.tokens
                .get(token)
                .cloned()
                .ok_or_else(|| AuthError::InvalidToken("unknown mock token".to_string()))
        }
    }

}

#[cfg(feature = "mock")]
pub use mock::MockVerifier;
