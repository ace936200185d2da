use serde_derive::{Deserialize, Serialize};

/// Player ranked by the total score, admins aren't ranked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub total_score: i64,
}
