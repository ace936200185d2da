use crate::challenges::ChallengeDifficulty;
use serde_derive::{Deserialize, Serialize};

/// Daily challenge quota of the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChallengeStatus {
    pub daily_challenges: u32,
    pub max_challenges: u32,
    pub remaining_challenges: u32,
    /// Whether the quota has been reset today and no challenges were accepted yet.
    #[serde(default)]
    pub is_reset: bool,
}

/// Parameters of the challenge the user accepts.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AcceptChallengeParams {
    pub email: String,
    pub prompt: String,
    pub mode: ChallengeDifficulty,
}

/// Daily quota after the challenge has been accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AcceptedChallenge {
    #[serde(default)]
    pub message: String,
    pub daily_challenges: u32,
    pub max_challenges: u32,
    pub remaining_challenges: u32,
}

/// Result of the completed photography challenge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSubmission {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub points: i64,
}
