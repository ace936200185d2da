use crate::error::Error as PhotoQuestError;
use anyhow::bail;
use serde_derive::Serialize;

/// Parameters of the new account.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupParams {
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Only checked locally, never sent to the API.
    #[serde(skip)]
    pub confirm_password: String,
}

impl SignupParams {
    pub fn validate(&self) -> anyhow::Result<()> {
        let required = [
            &self.name,
            &self.surname,
            &self.username,
            &self.email,
            &self.password,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            bail!(PhotoQuestError::validation("Please fill in all required fields."));
        }

        if self.password != self.confirm_password {
            bail!(PhotoQuestError::validation("Passwords do not match."));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SignupParams;
    use crate::error::{Error as PhotoQuestError, ErrorKind};
    use insta::assert_json_snapshot;

    fn mock_signup_params() -> SignupParams {
        SignupParams {
            name: "Dev".to_string(),
            surname: "Quest".to_string(),
            username: "devquest".to_string(),
            email: "dev@photoquest.app".to_string(),
            password: "pass".to_string(),
            confirm_password: "pass".to_string(),
        }
    }

    #[test]
    fn serialization() {
        assert_json_snapshot!(mock_signup_params(), @r###"
        {
          "name": "Dev",
          "surname": "Quest",
          "username": "devquest",
          "email": "dev@photoquest.app",
          "password": "pass"
        }
        "###);
    }

    #[test]
    fn validation() -> anyhow::Result<()> {
        mock_signup_params().validate()?;

        let error = PhotoQuestError::from(
            SignupParams {
                surname: String::new(),
                ..mock_signup_params()
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.user_message(), "Please fill in all required fields.");

        let error = PhotoQuestError::from(
            SignupParams {
                confirm_password: "other".to_string(),
                ..mock_signup_params()
            }
            .validate()
            .unwrap_err(),
        );
        assert_eq!(error.user_message(), "Passwords do not match.");

        Ok(())
    }
}
