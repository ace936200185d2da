use crate::users::{User, UserRole};
use serde_derive::{Deserialize, Serialize};

/// Client-side session state that survives restarts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SessionData {
    /// Bearer token issued at login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Role extracted from the token claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Cached profile of the signed in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl SessionData {
    /// Determines if there is nothing to persist.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.role.is_none() && self.user.is_none()
    }
}
