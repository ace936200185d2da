use crate::{
    navigation::Route,
    notifications::Notification,
    otp::{OtpDigits, OtpState},
};

/// Events emitted by the OTP verification view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEvent {
    /// One of the timers changed.
    Tick {
        remaining_seconds: u64,
        resend_cooldown_seconds: u64,
    },
    StateChanged(OtpState),
    InputChanged { digits: OtpDigits, focus: usize },
    Notification(Notification),
    /// View is done and the next view should be displayed.
    Navigate(Route),
}
