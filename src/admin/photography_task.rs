use crate::{challenges::ChallengeDifficulty, error::Error as PhotoQuestError};
use anyhow::bail;
use serde_derive::{Deserialize, Serialize};

/// Photography prompt managed from the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotographyTask {
    pub id: String,
    #[serde(rename = "task_description")]
    pub prompt: String,
    #[serde(rename = "difficulty")]
    pub mode: ChallengeDifficulty,
    #[serde(default)]
    pub points: i64,
    /// Either `active` or `inactive`.
    #[serde(default)]
    pub status: String,
    /// RFC 3339 creation date.
    #[serde(rename = "created_date", default)]
    pub created_at: String,
}

/// Parameters of the photography task to create or update.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PhotographyTaskParams {
    pub prompt: String,
    pub mode: ChallengeDifficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

impl PhotographyTaskParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.prompt.trim().is_empty() {
            bail!(PhotoQuestError::validation("Please enter the task description."));
        }

        if !matches!(self.status.as_deref(), None | Some("active") | Some("inactive")) {
            bail!(PhotoQuestError::validation(
                "Task status should be either active or inactive."
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PhotographyTask, PhotographyTaskParams};
    use crate::{
        challenges::ChallengeDifficulty,
        error::{Error as PhotoQuestError, ErrorKind},
    };
    use insta::assert_json_snapshot;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<PhotographyTask>(
                r#"
{
    "id": "665f1b2c9d1e4a00000000aa",
    "task_description": "Sunset reflecting on water",
    "difficulty": "easy",
    "points": 100,
    "status": "active",
    "created_date": "2025-06-04T10:00:00Z"
}
          "#
            )?,
            PhotographyTask {
                id: "665f1b2c9d1e4a00000000aa".to_string(),
                prompt: "Sunset reflecting on water".to_string(),
                mode: ChallengeDifficulty::Easy,
                points: 100,
                status: "active".to_string(),
                created_at: "2025-06-04T10:00:00Z".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn serialization() {
        assert_json_snapshot!(PhotographyTaskParams {
            prompt: "Sunset reflecting on water".to_string(),
            mode: ChallengeDifficulty::Easy,
            status: None,
            points: None,
        }, @r###"
        {
          "prompt": "Sunset reflecting on water",
          "mode": "easy"
        }
        "###);
    }

    #[test]
    fn validation() {
        let error = PhotoQuestError::from(
            PhotographyTaskParams {
                prompt: "Sunset reflecting on water".to_string(),
                mode: ChallengeDifficulty::Easy,
                status: Some("archived".to_string()),
                points: None,
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
    }
}
