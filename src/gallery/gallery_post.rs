use serde_derive::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

/// Photo published to the gallery, either a completed challenge or a guess challenge.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GalleryPost {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: String,
    pub image_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub correct_index: usize,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub prompt: String,
    /// Emails of the users who liked the post.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl GalleryPost {
    /// Determines if the post can be played as a guess challenge.
    pub fn is_guess_challenge(&self) -> bool {
        !self.choices.is_empty()
    }

    pub fn is_liked_by(&self, email: &str) -> bool {
        self.likes.iter().any(|like| like == email)
    }
}

/// Single gallery post as returned by the post details endpoint.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GalleryPostDetails {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: String,
    pub image_url: String,
    /// Formatted by the API as `YYYY-MM-DD hh:mm`.
    #[serde(default)]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub likes_count: u32,
    #[serde(default)]
    pub correct_index: usize,
}
