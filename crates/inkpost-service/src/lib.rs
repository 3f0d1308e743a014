//! # inkpost-service
//!
//! Business logic service layer for Inkpost. Each service orchestrates the
//! stores and the auth primitives to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod post;

pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
pub use post::{CreatePostRequest, PostService};
