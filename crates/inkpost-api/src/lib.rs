//! # inkpost-api
//!
//! HTTP API layer for Inkpost built on Axum.
//!
//! Provides the REST endpoints, the post detail page, middleware (bearer
//! authentication, role gate, CORS, logging), extractors, DTOs, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
