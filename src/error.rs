mod error_kind;

use anyhow::anyhow;
use std::fmt::{Debug, Display, Formatter};

pub use error_kind::ErrorKind;

/// Message displayed for transport failures.
const TRANSPORT_ERROR_MESSAGE: &str = "Unable to reach the server. Please check your connection.";

/// Message displayed when the session is no longer valid.
const UNAUTHORIZED_ERROR_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Message displayed for errors that cannot be classified.
const UNKNOWN_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Photo Quest client native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a Validation error instance with the given message.
    pub fn validation<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::Validation,
        }
    }

    /// Creates a Transport error instance with the given root cause.
    pub fn transport(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::Transport,
        }
    }

    /// Creates an error instance for the business error reported by the server.
    pub fn rejected<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::Rejected,
        }
    }

    /// Creates an error instance for the missing or invalidated session.
    pub fn unauthorized() -> Self {
        Self {
            root_cause: anyhow!("Unauthorized"),
            kind: ErrorKind::Unauthorized,
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message that is safe to display to the user.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::Validation | ErrorKind::Rejected => self.root_cause.to_string(),
            ErrorKind::Transport => TRANSPORT_ERROR_MESSAGE.to_string(),
            ErrorKind::Unauthorized => UNAUTHORIZED_ERROR_MESSAGE.to_string(),
            ErrorKind::Unknown => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use anyhow::anyhow;
    use insta::assert_debug_snapshot;

    #[test]
    fn can_create_validation_errors() {
        let error = Error::validation("Please enter all 6 digits.");

        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_debug_snapshot!(error, @r###""Please enter all 6 digits.""###);
        assert_eq!(error.user_message(), "Please enter all 6 digits.");
    }

    #[test]
    fn can_create_transport_errors() {
        let error = Error::transport(anyhow!("Connection refused").context("Cannot verify OTP."));

        assert_eq!(error.kind(), ErrorKind::Transport);
        assert_debug_snapshot!(error, @r###"
        Error {
            context: "Cannot verify OTP.",
            source: "Connection refused",
        }
        "###);
        assert_eq!(
            error.user_message(),
            "Unable to reach the server. Please check your connection."
        );
    }

    #[test]
    fn can_create_rejected_errors() {
        let error = Error::rejected("OTP has expired. Please request a new one.");

        assert_eq!(error.kind(), ErrorKind::Rejected);
        assert_eq!(
            error.user_message(),
            "OTP has expired. Please request a new one."
        );
    }

    #[test]
    fn can_create_unauthorized_errors() {
        let error = Error::unauthorized();

        assert_eq!(error.kind(), ErrorKind::Unauthorized);
        assert_debug_snapshot!(error, @r###""Unauthorized""###);
        assert_eq!(
            error.user_message(),
            "Your session has expired. Please log in again."
        );
    }

    #[test]
    fn can_create_unknown_errors() {
        let error = Error::from(anyhow!("Something sensitive"));

        assert_eq!(error.kind(), ErrorKind::Unknown);
        assert_debug_snapshot!(error, @r###""Something sensitive""###);
        assert_eq!(error.user_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn can_recover_original_error() {
        let rejected_error = Error::rejected("Invalid OTP");
        let error = Error::from(anyhow!(rejected_error).context("Cannot verify OTP."));

        assert_eq!(error.kind(), ErrorKind::Rejected);
        assert_eq!(error.user_message(), "Invalid OTP");
    }
}
