use crate::error::Error as PhotoQuestError;
use anyhow::bail;
use serde_derive::Serialize;

/// Credentials used to sign in, the identifier is either email or username.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginParams {
    pub identifier: String,
    pub password: String,
}

impl LoginParams {
    pub fn new<I: Into<String>, P: Into<String>>(identifier: I, password: P) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.identifier.trim().is_empty() || self.password.is_empty() {
            bail!(PhotoQuestError::validation(
                "Please enter your email or username and password."
            ));
        }

        Ok(())
    }
}
