use crate::challenges::ChallengeDifficulty;
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Photography prompt rolled for the selected difficulty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: String,
    pub prompt: String,
    pub mode: ChallengeDifficulty,
    #[serde(default)]
    pub points: i64,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Either `active` or `inactive`.
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::Challenge;
    use crate::challenges::ChallengeDifficulty;
    use time::macros::datetime;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<Challenge>(
                r#"
{
    "id": "665f1b2c9d1e4a00000000aa",
    "prompt": "Sunset reflecting on water",
    "mode": "easy",
    "points": 100,
    "created_at": "2025-06-04T10:00:00Z",
    "status": "active"
}
          "#
            )?,
            Challenge {
                id: "665f1b2c9d1e4a00000000aa".to_string(),
                prompt: "Sunset reflecting on water".to_string(),
                mode: ChallengeDifficulty::Easy,
                points: 100,
                created_at: Some(datetime!(2025-06-04 10:00:00 UTC)),
                status: "active".to_string(),
            }
        );

        Ok(())
    }
}
