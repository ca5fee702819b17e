//! Existence-checked user lookup.

use recipeshare_core::{DomainError, DomainResult, UserId};

use crate::directory::UserDirectory;
use crate::user::UserResponse;

/// Translates identity queries into response-shaped results.
///
/// Every operation is an idempotent read against the directory; the only
/// decision made here is existence enforcement — an absent record becomes
/// [`DomainError::NotFound`], never an empty response.
pub struct UserLookup<D> {
    directory: D,
}

impl<D> UserLookup<D>
where
    D: UserDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// One response per stored user, in directory order.
    pub fn list_users(&self) -> Vec<UserResponse> {
        self.directory
            .find_all()
            .iter()
            .map(UserResponse::from)
            .collect()
    }

    /// Resolve a user by identifier.
    pub fn user_by_id(&self, id: UserId) -> DomainResult<UserResponse> {
        let user = self.directory.find_by_id(id).ok_or(DomainError::NotFound)?;
        Ok(UserResponse::from(&user))
    }

    /// Resolve the authenticated caller.
    ///
    /// The principal's username is passed explicitly by the transport layer;
    /// this crate holds no ambient notion of "the current request".
    pub fn logged_in_user(&self, principal_username: &str) -> DomainResult<UserResponse> {
        let user = self
            .directory
            .find_by_username(principal_username)
            .ok_or(DomainError::NotFound)?;
        Ok(UserResponse::from(&user))
    }
}
