//! Blog post entities.

pub mod model;

pub use model::{CreatePost, DEFAULT_AUTHOR, Post, UpdatePost};
