//! Application state with repository-based storage.
//!
//! The shared state passed to all request handlers: repository trait
//! objects for storage and the authentication state. Concrete backends
//! are selected at compile time via feature flags.

use std::sync::Arc;

use wishlist_auth::AuthState;
use wishlist_core::storage::{ItemRepository, ListRepository};

/// Shared application state.
///
/// Cloned for each request handler. The store handle lives inside the
/// repositories as an injected dependency, never as a process global, so
/// tests can substitute the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub lists: Arc<dyn ListRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub auth: AuthState,
}

impl AppState {
    fn build(lists: Arc<dyn ListRepository>, items: Arc<dyn ItemRepository>, auth: AuthState) -> Self {
        Self { lists, items, auth }
    }
}

/// Lets the auth extractor pull its state out of the application state.
impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::{DynamoDbStore, StoreRepository};
    use wishlist_auth::{AuthConfig, JwksVerifier};

    impl AppState {
        /// Creates AppState backed by DynamoDB, with JWKS token
        /// verification configured from the environment.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let store = Arc::new(DynamoDbStore::new(
                client,
                config.table_name.clone(),
                config.index_name.clone(),
            ));
            let repo = Arc::new(StoreRepository::new(store));

            let verifier = Arc::new(JwksVerifier::new(AuthConfig::from_env()?));

            Ok(Self::build(repo.clone(), repo, AuthState::new(verifier)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::{InMemoryStore, StoreRepository};
    use wishlist_auth::{AuthConfig, JwksVerifier};

    impl AppState {
        /// Creates AppState backed by process-local storage. Data is lost
        /// on restart; useful for local development without AWS access.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            let store = Arc::new(InMemoryStore::new());
            let repo = Arc::new(StoreRepository::new(store));

            let verifier = Arc::new(JwksVerifier::new(AuthConfig::from_env()?));

            Ok(Self::build(repo.clone(), repo, AuthState::new(verifier)))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;
    use crate::storage::{InMemoryStore, StoreRepository};
    use wishlist_auth::MockVerifier;

    impl AppState {
        /// Creates an AppState over in-memory storage with the given mock
        /// verifier. Only available in test builds.
        pub fn for_tests(verifier: MockVerifier) -> Self {
            let store = Arc::new(InMemoryStore::new());
            let repo = Arc::new(StoreRepository::new(store));

            Self::build(repo.clone(), repo, AuthState::new(Arc::new(verifier)))
        }
    }
}
