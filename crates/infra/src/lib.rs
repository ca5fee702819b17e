//! `recipeshare-infra` — storage adapters.
//!
//! Durable storage is a collaborator boundary: this crate provides the
//! in-memory directory used for development and tests. A database-backed
//! adapter implements the same trait without touching the lookup core.

pub mod directory;

pub use directory::InMemoryUserDirectory;
