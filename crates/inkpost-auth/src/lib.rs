//! # inkpost-auth
//!
//! Authentication and authorization primitives for Inkpost.
//!
//! ## Modules
//!
//! - `jwt`: signed bearer token issuance and verification
//! - `password`: Argon2id password hashing and verification
//! - `rbac`: the role gate applied to mutating routes

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use password::PasswordHasher;
pub use rbac::RbacEnforcer;
