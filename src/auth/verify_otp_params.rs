use serde_derive::Serialize;

/// Parameters of the OTP verification request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpParams {
    pub email: String,
    pub code: String,
    /// Passed through as is, the API decides how to treat it.
    pub is_password_reset: bool,
}
