use serde::{Deserialize, Serialize};

use recipeshare_core::UserId;

/// Stored user record.
///
/// Deliberately not `Serialize`: the record carries a credential field and
/// must never cross the transport boundary as-is. [`UserResponse`] is the
/// only outbound shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Login handle; doubles as the principal name in bearer tokens.
    pub username: String,
    pub password_hash: String,
}

/// Transport-safe projection of a [`User`].
///
/// Fixed at exactly {userID, firstName, lastName, username}; everything else
/// on the record (the credential in particular) is dropped by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "userID")]
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
        }
    }
}
