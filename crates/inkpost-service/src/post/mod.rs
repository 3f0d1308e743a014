//! Blog post management.

pub mod service;

pub use service::{CreatePostRequest, PostService};
