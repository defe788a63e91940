//! Storage backends.
//!
//! The repository layer is generic over `wishlist_core::store::KeyValueStore`;
//! this module provides the concrete store implementations, selected at
//! compile time via feature flags, plus the repository that composes
//! keys and enforces ownership on top of any store.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): DynamoDB store using `aws-sdk-dynamodb`
//! - `inmemory`: process-local store, also compiled for tests
//!
//! These features are mutually exclusive - only one storage backend can
//! be enabled at a time.

// Compile-time checks for backend selection
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!(
    "Features 'dynamodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p wishlist --features dynamodb"
);

pub mod keys;
pub mod record;
mod repository;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub use repository::StoreRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryStore;
