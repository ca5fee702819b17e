//! Persistence gateway contract for user records.

use std::sync::Arc;

use recipeshare_core::UserId;

use crate::user::User;

/// Read-side gateway over durable user storage.
///
/// The lookup core only ever reads; registration and mutation are a separate
/// write path outside this crate. Adapters own their concurrency and report
/// absence as `None`, never as an empty record.
pub trait UserDirectory: Send + Sync {
    /// All user records, in the order the store supplies them.
    fn find_all(&self) -> Vec<User>;

    /// Fetch a user by identifier.
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Fetch a user by login handle (exact match).
    fn find_by_username(&self, username: &str) -> Option<User>;
}

impl<S> UserDirectory for Arc<S>
where
    S: UserDirectory + ?Sized,
{
    fn find_all(&self) -> Vec<User> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        (**self).find_by_id(id)
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        (**self).find_by_username(username)
    }
}
