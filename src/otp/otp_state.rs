use serde_derive::Serialize;

/// State of the OTP verification.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OtpState {
    /// Code is still valid, input and submission are accepted.
    Active,
    /// Submission is in flight, input is disabled.
    Verifying,
    /// Code lifetime is over, only resend is accepted.
    Expired,
    /// Code has been successfully verified.
    Verified,
}
