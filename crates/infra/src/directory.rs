use std::sync::RwLock;

use recipeshare_core::UserId;
use recipeshare_users::{User, UserDirectory};

/// In-memory user directory for dev/tests.
///
/// Records are kept in insertion order so `find_all` is deterministic.
/// Reads clone out under a shared lock; a poisoned lock degrades to "no
/// records" rather than panicking a request thread.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Insert a record, replacing any existing record with the same id.
    ///
    /// Registration is outside the lookup core; this inherent method exists
    /// for wiring and tests, which is why it is not on [`UserDirectory`].
    pub fn insert(&self, user: User) {
        if let Ok(mut users) = self.inner.write() {
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(existing) => *existing = user,
                None => users.push(user),
            }
        }
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_all(&self) -> Vec<User> {
        match self.inner.read() {
            Ok(users) => users.clone(),
            Err(_) => Vec::new(),
        }
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        let users = self.inner.read().ok()?;
        users.iter().find(|u| u.id == id).cloned()
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        let users = self.inner.read().ok()?;
        users.iter().find(|u| u.username == username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> User {
        User {
            id: UserId::new(id),
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn find_all_preserves_insertion_order() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(user(3, "c"));
        directory.insert(user(1, "a"));
        directory.insert(user(2, "b"));

        let ids: Vec<i64> = directory.find_all().iter().map(|u| u.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn insert_with_existing_id_replaces_in_place() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(user(1, "a"));
        directory.insert(user(2, "b"));
        directory.insert(user(1, "a.renamed"));

        let all = directory.find_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "a.renamed");
        assert_eq!(all[1].username, "b");
    }

    #[test]
    fn find_by_id_distinguishes_absent_from_present() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(user(1, "a"));

        assert!(directory.find_by_id(UserId::new(1)).is_some());
        assert!(directory.find_by_id(UserId::new(999)).is_none());
    }

    #[test]
    fn find_by_username_is_exact() {
        let directory = InMemoryUserDirectory::new();
        directory.insert(user(1, "ann.k"));

        assert!(directory.find_by_username("ann.k").is_some());
        assert!(directory.find_by_username("Ann.K").is_none());
        assert!(directory.find_by_username("ann").is_none());
    }
}
