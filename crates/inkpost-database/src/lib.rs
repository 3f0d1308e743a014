//! # inkpost-database
//!
//! Persistence for credential records and posts. Defines the store traits,
//! the PostgreSQL repositories, an in-memory implementation for development
//! and tests, and the [`StoreManager`] that picks one from configuration.

pub mod memory;
pub mod provider;
pub mod repositories;
pub mod traits;

pub use provider::{StoreHealth, StoreManager};
pub use traits::{CredentialStore, PostStore};
