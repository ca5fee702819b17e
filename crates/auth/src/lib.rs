//! `recipeshare-auth` — pure authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it verifies
//! bearer tokens and exposes the authenticated principal's claims. Token
//! issuance lives outside the backend (an identity provider, or the test
//! suite minting its own tokens).

pub mod claims;
pub mod validator;

pub use claims::{AuthClaims, TokenValidationError, validate_claims};
pub use validator::{Hs256JwtValidator, JwtValidator, TokenError};
