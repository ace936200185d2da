use crate::error::Error as PhotoQuestError;
use anyhow::bail;
use serde_derive::Serialize;

/// Parameters of the profile update, the password is changed only if the new one is provided.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdateParams {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip)]
    pub confirm_password: Option<String>,
}

impl ProfileUpdateParams {
    /// Validates parameters and trims whitespace around the profile fields.
    pub fn normalize(self) -> anyhow::Result<Self> {
        let current_password = self.current_password.filter(|value| !value.is_empty());
        let new_password = self.new_password.filter(|value| !value.is_empty());
        let confirm_password = self.confirm_password.filter(|value| !value.is_empty());

        if current_password.is_some() || new_password.is_some() {
            if current_password.is_none() {
                bail!(PhotoQuestError::validation(
                    "Please enter your current password to change password."
                ));
            }

            if new_password.is_none() {
                bail!(PhotoQuestError::validation("Please enter a new password."));
            }

            if new_password != confirm_password {
                bail!(PhotoQuestError::validation(
                    "Please make sure your new passwords match."
                ));
            }
        }

        let params = Self {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            current_password,
            new_password,
            confirm_password,
        };

        if params.name.is_empty()
            || params.surname.is_empty()
            || params.username.is_empty()
            || params.email.is_empty()
        {
            bail!(PhotoQuestError::validation("Please fill in all required fields."));
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileUpdateParams;
    use crate::error::{Error as PhotoQuestError, ErrorKind};
    use insta::assert_json_snapshot;

    fn mock_params() -> ProfileUpdateParams {
        ProfileUpdateParams {
            name: " Dev ".to_string(),
            surname: "Quest".to_string(),
            username: "devquest".to_string(),
            email: "dev@photoquest.app".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn normalizes_params() -> anyhow::Result<()> {
        assert_json_snapshot!(mock_params().normalize()?, @r###"
        {
          "name": "Dev",
          "surname": "Quest",
          "username": "devquest",
          "email": "dev@photoquest.app"
        }
        "###);

        assert_json_snapshot!(ProfileUpdateParams {
            current_password: Some("old-pass".to_string()),
            new_password: Some("new-pass".to_string()),
            confirm_password: Some("new-pass".to_string()),
            ..mock_params()
        }.normalize()?, @r###"
        {
          "name": "Dev",
          "surname": "Quest",
          "username": "devquest",
          "email": "dev@photoquest.app",
          "current_password": "old-pass",
          "new_password": "new-pass"
        }
        "###);

        Ok(())
    }

    #[test]
    fn validation() {
        let cases = [
            (
                ProfileUpdateParams {
                    new_password: Some("new-pass".to_string()),
                    confirm_password: Some("new-pass".to_string()),
                    ..mock_params()
                },
                "Please enter your current password to change password.",
            ),
            (
                ProfileUpdateParams {
                    current_password: Some("old-pass".to_string()),
                    ..mock_params()
                },
                "Please enter a new password.",
            ),
            (
                ProfileUpdateParams {
                    current_password: Some("old-pass".to_string()),
                    new_password: Some("new-pass".to_string()),
                    confirm_password: Some("other-pass".to_string()),
                    ..mock_params()
                },
                "Please make sure your new passwords match.",
            ),
            (
                ProfileUpdateParams {
                    username: "  ".to_string(),
                    ..mock_params()
                },
                "Please fill in all required fields.",
            ),
        ];

        for (params, message) in cases {
            let error = PhotoQuestError::from(params.normalize().unwrap_err());
            assert_eq!(error.kind(), ErrorKind::Validation);
            assert_eq!(error.user_message(), message);
        }
    }
}
