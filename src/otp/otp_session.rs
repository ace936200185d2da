use crate::{
    auth::VerifyOtpResponse,
    config::OtpConfig,
    error::Error as PhotoQuestError,
    navigation::Route,
    otp::{OTP_LENGTH, OtpDigits, OtpKey, OtpState},
};
use anyhow::bail;

/// State of the single OTP verification: entered digits, code lifetime and resend cooldown.
/// All operations are synchronous, timers and requests are driven by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSession {
    email: String,
    is_password_reset: bool,
    digits: OtpDigits,
    focus: usize,
    remaining_seconds: u64,
    resend_cooldown_seconds: u64,
    code_lifetime: u64,
    resend_cooldown: u64,
    submission_in_flight: bool,
    verified: bool,
}

impl OtpSession {
    /// Creates session for the code that has just been issued for the specified email.
    pub fn new(email: impl Into<String>, is_password_reset: bool, config: &OtpConfig) -> Self {
        Self {
            email: email.into(),
            is_password_reset,
            digits: OtpDigits::default(),
            focus: 0,
            remaining_seconds: config.code_lifetime.as_secs(),
            resend_cooldown_seconds: config.initial_resend_cooldown.as_secs(),
            code_lifetime: config.code_lifetime.as_secs(),
            resend_cooldown: config.resend_cooldown.as_secs(),
            submission_in_flight: false,
            verified: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_password_reset(&self) -> bool {
        self.is_password_reset
    }

    pub fn digits(&self) -> &OtpDigits {
        &self.digits
    }

    /// Index of the focused digit slot.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn resend_cooldown_seconds(&self) -> u64 {
        self.resend_cooldown_seconds
    }

    pub fn is_submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub fn state(&self) -> OtpState {
        if self.verified {
            OtpState::Verified
        } else if self.submission_in_flight {
            OtpState::Verifying
        } else if self.remaining_seconds == 0 {
            OtpState::Expired
        } else {
            OtpState::Active
        }
    }

    /// Advances the code lifetime countdown by one second. Returns `true` only for the tick that
    /// expires the code.
    pub fn tick(&mut self) -> bool {
        if self.verified || self.remaining_seconds == 0 {
            return false;
        }

        self.remaining_seconds -= 1;
        self.remaining_seconds == 0
    }

    /// Advances the resend cooldown by one second.
    pub fn tick_resend_cooldown(&mut self) {
        self.resend_cooldown_seconds = self.resend_cooldown_seconds.saturating_sub(1);
    }

    /// Applies key input to the digit slots. Returns `false` if the key was rejected, keys are
    /// only accepted in the `Active` state.
    pub fn handle_key(&mut self, key: OtpKey) -> bool {
        if self.state() != OtpState::Active {
            return false;
        }

        match key {
            OtpKey::Char(digit) => {
                if !self.digits.set(self.focus, digit) {
                    return false;
                }

                if self.focus < OTP_LENGTH - 1 {
                    self.focus += 1;
                }
            }
            OtpKey::Backspace => {
                if !self.digits.clear(self.focus) {
                    self.focus = self.focus.saturating_sub(1);
                }
            }
            OtpKey::ArrowLeft => self.focus = self.focus.saturating_sub(1),
            OtpKey::ArrowRight => self.focus = (self.focus + 1).min(OTP_LENGTH - 1),
            OtpKey::Focus(index) if index < OTP_LENGTH => self.focus = index,
            OtpKey::Focus(_) => return false,
        }

        true
    }

    /// Marks submission as in flight and returns the code to send.
    pub fn begin_submit(&mut self) -> anyhow::Result<String> {
        if self.verified {
            bail!(PhotoQuestError::validation("OTP has already been verified."));
        }

        if self.remaining_seconds == 0 {
            bail!(PhotoQuestError::validation(
                "OTP has expired. Please request a new one."
            ));
        }

        if self.submission_in_flight {
            bail!(PhotoQuestError::validation("Verification is already in progress."));
        }

        let Some(code) = self.digits.code() else {
            bail!(PhotoQuestError::validation("Please enter all 6 digits."));
        };

        self.submission_in_flight = true;
        Ok(code)
    }

    /// Applies successful verification response and returns the view to navigate to.
    pub fn complete_submit(&mut self, response: VerifyOtpResponse) -> anyhow::Result<Route> {
        self.submission_in_flight = false;

        let route = if self.is_password_reset {
            let Some(token) = response.token.filter(|token| !token.is_empty()) else {
                bail!(PhotoQuestError::rejected("Invalid response from server"));
            };

            Route::ResetPassword {
                email: self.email.clone(),
                token,
            }
        } else {
            Route::Login {
                email: Some(self.email.clone()),
            }
        };

        self.verified = true;
        Ok(route)
    }

    /// Applies failed verification response, entered digits are kept.
    pub fn fail_submit(&mut self) {
        self.submission_in_flight = false;
    }

    /// Resets code lifetime and digits, and starts a new resend cooldown.
    pub fn begin_resend(&mut self) -> anyhow::Result<()> {
        if self.verified {
            bail!(PhotoQuestError::validation("OTP has already been verified."));
        }

        if self.resend_cooldown_seconds > 0 {
            bail!(PhotoQuestError::validation(format!(
                "Please wait {} seconds before requesting a new code.",
                self.resend_cooldown_seconds
            )));
        }

        self.digits.clear_all();
        self.focus = 0;
        self.remaining_seconds = self.code_lifetime;
        self.resend_cooldown_seconds = self.resend_cooldown;

        Ok(())
    }
}
