use serde_derive::Deserialize;

/// Response of the successful OTP verification. The token is only issued for password resets.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}
