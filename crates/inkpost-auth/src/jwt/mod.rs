//! JWT bearer token issuance and verification.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TOKEN_TTL_HOURS};
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::{IssuedToken, JwtEncoder};
