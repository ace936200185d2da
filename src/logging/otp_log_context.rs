use crate::otp::OtpSession;
use serde::Serialize;

/// Represents a context for the OTP verification used for the structured logging.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpLogContext {
    /// Email of the account being verified.
    pub email: String,
    /// Whether the verification continues the password reset.
    pub is_password_reset: bool,
    /// Seconds left before the code expires.
    pub remaining_seconds: u64,
}

impl OtpSession {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> OtpLogContext {
        OtpLogContext {
            email: self.email().to_string(),
            is_password_reset: self.is_password_reset(),
            remaining_seconds: self.remaining_seconds(),
        }
    }
}
