use crate::users::{UserRole, UserStats};
use serde_derive::{Deserialize, Serialize};

/// Photo Quest user profile as returned by the `/profile` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub total_score: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
}

impl User {
    /// Returns the user's full name.
    pub fn full_name(&self) -> String {
        if self.surname.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.surname)
        }
    }
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}
