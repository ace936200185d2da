use crate::{
    error::{Error as PhotoQuestError, ErrorKind},
    notifications::NotificationLevel,
};
use serde_derive::Serialize;
use std::fmt::{Display, Formatter};

/// Defines a user-facing notification (toast).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity of the notification.
    pub level: NotificationLevel,
    /// Short title of the notification.
    pub title: String,
    /// Message displayed to the user.
    pub message: String,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message)
    }
}

impl From<&PhotoQuestError> for Notification {
    fn from(err: &PhotoQuestError) -> Self {
        let title = match err.kind() {
            ErrorKind::Validation => "Invalid input",
            ErrorKind::Transport => "Network error",
            ErrorKind::Unauthorized => "Session expired",
            ErrorKind::Rejected | ErrorKind::Unknown => "Error",
        };

        Self::error(title, err.user_message())
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.title, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::Notification;
    use crate::{error::Error as PhotoQuestError, notifications::NotificationLevel};
    use anyhow::anyhow;
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() {
        assert_json_snapshot!(Notification::warning("OTP Expired", "Your code has expired. Please request a new one."), @r###"
        {
          "level": "warning",
          "title": "OTP Expired",
          "message": "Your code has expired. Please request a new one."
        }
        "###);
    }

    #[test]
    fn can_be_created_from_errors() {
        assert_eq!(
            Notification::from(&PhotoQuestError::validation("Please enter all 6 digits.")),
            Notification {
                level: NotificationLevel::Error,
                title: "Invalid input".to_string(),
                message: "Please enter all 6 digits.".to_string(),
            }
        );
        assert_eq!(
            Notification::from(&PhotoQuestError::transport(anyhow!("Connection refused"))),
            Notification::error(
                "Network error",
                "Unable to reach the server. Please check your connection."
            )
        );
        assert_eq!(
            Notification::from(&PhotoQuestError::rejected("Invalid OTP")),
            Notification::error("Error", "Invalid OTP")
        );
        assert_eq!(
            Notification::from(&PhotoQuestError::unauthorized()),
            Notification::error("Session expired", "Your session has expired. Please log in again.")
        );
        assert_eq!(
            Notification::from(&PhotoQuestError::from(anyhow!("Secret details"))),
            Notification::error("Error", "Something went wrong. Please try again.")
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Notification::success("OTP Verified", "Verification successful!").to_string(),
            "[success] OTP Verified: Verification successful!"
        );
    }
}
