use serde_derive::{Deserialize, Serialize};

/// Aggregated user activity, computed by the API when the profile is requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_challenges: u32,
    pub completed_challenges: u32,
    pub correct_answers: u32,
    pub total_photos_uploaded: u32,
    pub total_likes_received: u32,
}

#[cfg(test)]
mod tests {
    use crate::users::UserStats;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<UserStats>(
                r#"
{
    "totalChallenges": 10,
    "completedChallenges": 7,
    "correctAnswers": 5,
    "totalPhotosUploaded": 3,
    "totalLikesReceived": 42
}
          "#
            )?,
            UserStats {
                total_challenges: 10,
                completed_challenges: 7,
                correct_answers: 5,
                total_photos_uploaded: 3,
                total_likes_received: 42,
            }
        );

        assert_eq!(
            serde_json::from_str::<UserStats>("{}")?,
            UserStats::default()
        );

        Ok(())
    }
}
