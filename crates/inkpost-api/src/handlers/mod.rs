//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod page;
pub mod post;
