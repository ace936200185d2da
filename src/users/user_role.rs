use serde::{Deserialize, Serialize};

/// Role of the Photo Quest user, as issued by the API.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
    /// Regular player.
    #[default]
    User,
    /// Administrator with access to the admin dashboard.
    Admin,
    /// Any role this client doesn't know about, including the empty one.
    #[serde(other)]
    Other,
}

impl UserRole {
    /// Determines if the role grants access to the admin dashboard.
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}
