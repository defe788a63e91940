//! Core domain and storage contracts for the wishlist service.
//!
//! This crate is storage-agnostic. It defines the domain types and their
//! validation, the key-value store abstraction that concrete backends
//! implement, and the repository traits the HTTP layer consumes.

pub mod storage;
pub mod store;
pub mod wishlist;
