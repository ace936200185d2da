mod otp_backend;
mod otp_command;
mod otp_digits;
mod otp_event;
mod otp_key;
mod otp_session;
mod otp_state;
mod otp_verification;

pub use self::{
    otp_backend::OtpBackend,
    otp_command::OtpCommand,
    otp_digits::{OTP_LENGTH, OtpDigits},
    otp_event::OtpEvent,
    otp_key::OtpKey,
    otp_session::OtpSession,
    otp_state::OtpState,
    otp_verification::{OtpVerification, OtpVerificationHandle},
};
