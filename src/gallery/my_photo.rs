use serde_derive::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

/// Photo published by the signed in user.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MyPhoto {
    pub id: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub prompt: String,
}

impl MyPhoto {
    /// Returns the challenge task or the guess prompt the photo was taken for.
    pub fn caption(&self) -> &str {
        if self.task.is_empty() {
            &self.prompt
        } else {
            &self.task
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MyPhoto;
    use time::macros::datetime;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let photo = serde_json::from_str::<MyPhoto>(
            r#"
{
    "id": "665f1b2c9d1e4a00000000dd",
    "image_url": "https://cdn.photoquest.app/photos/bridge.jpg",
    "created_at": "2025-06-04T10:00:00Z",
    "likes": null,
    "task": "",
    "prompt": "Old bridge"
}
          "#,
        )?;
        assert_eq!(photo.created_at, datetime!(2025-06-04 10:00:00 UTC));
        assert!(photo.likes.is_empty());
        assert_eq!(photo.caption(), "Old bridge");

        Ok(())
    }
}
