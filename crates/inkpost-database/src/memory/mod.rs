//! In-memory stores for single-process development and tests.

pub mod post;
pub mod user;

pub use post::MemoryPostStore;
pub use user::MemoryUserStore;
