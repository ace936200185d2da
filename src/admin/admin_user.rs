use crate::error::Error as PhotoQuestError;
use anyhow::bail;
use serde_derive::{Deserialize, Serialize};

/// User as listed on the admin dashboard.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub email: String,
    #[serde(default)]
    pub join_date: String,
    #[serde(default)]
    pub points: i64,
}

/// Parameters admins can change for any user.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AdminUserUpdateParams {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub total_score: i64,
}

impl AdminUserUpdateParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            bail!(PhotoQuestError::validation("Please fill in all required fields."));
        }

        if self.total_score < 0 {
            bail!(PhotoQuestError::validation("Points can't be negative."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AdminUser, AdminUserUpdateParams};
    use crate::error::{Error as PhotoQuestError, ErrorKind};

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<AdminUser>(
                r#"{ "id": "1", "name": "Dev", "surname": "Quest", "email": "dev@photoquest.app", "join_date": "2025-06-04", "points": 320 }"#
            )?,
            AdminUser {
                id: "1".to_string(),
                name: "Dev".to_string(),
                surname: "Quest".to_string(),
                email: "dev@photoquest.app".to_string(),
                join_date: "2025-06-04".to_string(),
                points: 320,
            }
        );

        Ok(())
    }

    #[test]
    fn validation() {
        let error = PhotoQuestError::from(
            AdminUserUpdateParams {
                name: "Dev".to_string(),
                surname: "Quest".to_string(),
                email: "dev@photoquest.app".to_string(),
                total_score: -1,
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
    }
}
