//! Bearer-token authentication for the wishlist service.
//!
//! This crate provides:
//! - Token verification against an identity provider's published JWKS
//! - An axum extractor exposing the authenticated identity
//! - A mock verifier for tests (behind the `mock` feature)
//!
//! The identity provider itself is an external collaborator: this crate
//! only consumes tokens it has already issued.

mod config;
mod error;
mod extractors;
mod jwks;
mod state;
mod verifier;

pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use jwks::JwksVerifier;
pub use state::AuthState;
#[cfg(feature = "mock")]
pub use verifier::MockVerifier;
pub use verifier::{Identity, TokenVerifier};
