use crate::{error::Error as PhotoQuestError, uploads::PhotoUpload};
use anyhow::bail;
use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Number of choices in the guess challenge.
pub const GUESS_CHOICES_COUNT: usize = 4;

/// Photo posted by another user, the player guesses its prompt from the choices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GuessChallenge {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub correct_index: usize,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub points: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub author: String,
}

impl GuessChallenge {
    /// Returns letter the choice is labeled with, `a` for the first one.
    pub fn choice_label(index: usize) -> char {
        (b'a' + (index % 26) as u8) as char
    }
}

/// Outcome of the submitted guess.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub is_correct: bool,
    #[serde(default)]
    pub points: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct SubmitGuessParams<'a> {
    pub challenge_id: &'a str,
    pub selected_index: usize,
    pub email: &'a str,
}

/// New guess challenge created from the user's photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessChallengeParams {
    pub prompt: String,
    pub difficulty: String,
    pub choices: [String; GUESS_CHOICES_COUNT],
    pub correct_index: usize,
    pub photo: PhotoUpload,
}

impl GuessChallengeParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.choices.iter().any(|choice| choice.trim().is_empty())
            || self.correct_index >= GUESS_CHOICES_COUNT
        {
            bail!(PhotoQuestError::validation(
                "Please fill in all fields and select a correct answer."
            ));
        }

        self.photo.validate()
    }
}
