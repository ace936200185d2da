use crate::error::Error as PhotoQuestError;
use anyhow::bail;
use serde_derive::Serialize;

/// Parameters of the password reset that follows successful OTP verification.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordParams {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl ResetPasswordParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.email.trim().is_empty() || self.new_password.is_empty() {
            bail!(PhotoQuestError::validation("Please fill in all required fields."));
        }

        if self.new_password != self.confirm_password {
            bail!(PhotoQuestError::validation("Passwords do not match."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ResetPasswordParams;
    use crate::error::{Error as PhotoQuestError, ErrorKind};
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() {
        assert_json_snapshot!(ResetPasswordParams {
            email: "user@test.com".to_string(),
            code: Some("441225".to_string()),
            new_password: "new-pass".to_string(),
            confirm_password: "new-pass".to_string(),
        }, @r###"
        {
          "email": "user@test.com",
          "code": "441225",
          "newPassword": "new-pass"
        }
        "###);
    }

    #[test]
    fn validation() {
        let error = PhotoQuestError::from(
            ResetPasswordParams {
                email: "user@test.com".to_string(),
                code: None,
                new_password: "new-pass".to_string(),
                confirm_password: "other-pass".to_string(),
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.user_message(), "Passwords do not match.");
    }
}
