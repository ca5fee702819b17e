//! `recipeshare-users` — user identity resolution domain.
//!
//! This crate contains the user lookup core: the stored `User` shape, the
//! transport-safe `UserResponse` projection, the persistence gateway
//! contract, and the lookup service that enforces existence. No IO, no HTTP,
//! no storage engine.

pub mod directory;
pub mod service;
pub mod user;

pub use directory::UserDirectory;
pub use service::UserLookup;
pub use user::{User, UserResponse};
