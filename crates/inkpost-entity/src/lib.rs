//! # inkpost-entity
//!
//! Domain entity models for Inkpost. Every struct in this crate represents
//! a database table row or a domain value object. Database entities
//! additionally derive `sqlx::FromRow`.

pub mod post;
pub mod user;
