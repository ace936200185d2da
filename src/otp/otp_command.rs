use crate::otp::OtpKey;

/// Commands the OTP verification view accepts from the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OtpCommand {
    Key(OtpKey),
    Submit,
    Resend,
    /// Leaves the view, pending responses are discarded.
    Leave,
}
