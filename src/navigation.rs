use std::fmt::{Display, Formatter};

/// Views of the Photo Quest client that flows can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Login view, optionally prefilled with the account email.
    Login { email: Option<String> },
    /// OTP verification view for the account verification or password reset.
    OtpVerification {
        email: String,
        is_password_reset: bool,
    },
    /// Password reset continuation view, authorized by the token issued during OTP verification.
    ResetPassword { email: String, token: String },
    /// Profile of the current user.
    Profile,
    /// Admin dashboard.
    Admin,
}

impl Route {
    /// Returns path of the view in the web application.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login { .. } => "/login",
            Route::OtpVerification { .. } => "/otp-verification",
            Route::ResetPassword { .. } => "/reset-password",
            Route::Profile => "/profile",
            Route::Admin => "/admin",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn paths() {
        assert_eq!(Route::Login { email: None }.path(), "/login");
        assert_eq!(
            Route::OtpVerification {
                email: "user@test.com".to_string(),
                is_password_reset: true
            }
            .to_string(),
            "/otp-verification"
        );
        assert_eq!(
            Route::ResetPassword {
                email: "user@test.com".to_string(),
                token: "token".to_string()
            }
            .path(),
            "/reset-password"
        );
        assert_eq!(Route::Profile.path(), "/profile");
        assert_eq!(Route::Admin.to_string(), "/admin");
    }
}
