use crate::{
    api::{Api, Credentials},
    auth::{
        LoginParams, ResetPasswordParams, SignupParams, TokenClaims, VerifyOtpParams,
        VerifyOtpResponse,
    },
    error::Error as PhotoQuestError,
    navigation::Route,
};
use anyhow::{Context, bail};
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
struct ForgotPasswordParams<'a> {
    email: &'a str,
}

/// API to sign up, sign in and recover accounts.
pub struct AuthApi<'a> {
    api: &'a Api,
}

impl<'a> AuthApi<'a> {
    /// Creates Auth API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Signs in and starts a new session. Returns the view to navigate to.
    pub async fn login(&self, params: &LoginParams) -> anyhow::Result<Route> {
        params.validate()?;

        let response: LoginResponse = self
            .api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("auth/login"))
                    .json(params),
                Credentials::Anonymous,
            )
            .await
            .with_context(|| format!("Cannot log in ({}).", params.identifier))?;

        let Some(token) = response.token else {
            bail!(PhotoQuestError::rejected("Invalid response from server"));
        };

        let claims = TokenClaims::decode(&token)?;
        self.api.session.sign_in(token, claims.role).await?;
        tracing::info!(role = ?claims.role, "Successfully logged in.");

        if let Err(err) = self.api.session.refresh(self.api).await {
            tracing::warn!("Cannot retrieve profile after login: {err:?}");
        }

        Ok(if claims.role.is_admin() {
            Route::Admin
        } else {
            Route::Profile
        })
    }

    /// Creates a new account, the API sends a verification code to the account email.
    pub async fn signup(&self, params: &SignupParams) -> anyhow::Result<Route> {
        params.validate()?;

        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("auth/signup"))
                    .json(params),
                Credentials::Anonymous,
            )
            .await
            .with_context(|| format!("Cannot sign up ({}).", params.email))?;

        Ok(Route::OtpVerification {
            email: params.email.clone(),
            is_password_reset: false,
        })
    }

    /// Requests a password reset code for the account with the specified email.
    pub async fn forgot_password(&self, email: &str) -> anyhow::Result<Route> {
        if email.trim().is_empty() {
            bail!(PhotoQuestError::validation("Please enter your email."));
        }

        self.request_code(email).await?;

        Ok(Route::OtpVerification {
            email: email.to_string(),
            is_password_reset: true,
        })
    }

    /// Issues a new verification code, any previously issued code is revoked.
    pub async fn request_code(&self, email: &str) -> anyhow::Result<()> {
        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("auth/forgot-password"))
                    .json(&ForgotPasswordParams { email }),
                Credentials::Anonymous,
            )
            .await
            .with_context(|| format!("Cannot request verification code ({email})."))?;

        tracing::debug!(email, "Requested verification code.");
        Ok(())
    }

    /// Verifies the code sent to the account email.
    pub async fn verify_otp(&self, params: &VerifyOtpParams) -> anyhow::Result<VerifyOtpResponse> {
        self.api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("auth/verify-otp"))
                    .json(params),
                Credentials::Anonymous,
            )
            .await
            .with_context(|| format!("Cannot verify OTP ({}).", params.email))
    }

    /// Sets a new password, authorized by the token issued during OTP verification.
    pub async fn reset_password(
        &self,
        params: &ResetPasswordParams,
        reset_token: &str,
    ) -> anyhow::Result<Route> {
        params.validate()?;

        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("auth/reset-password"))
                    .json(params),
                Credentials::Token(reset_token.to_string()),
            )
            .await
            .with_context(|| format!("Cannot reset password ({}).", params.email))?;

        Ok(Route::Login {
            email: Some(params.email.clone()),
        })
    }

    /// Ends the current session.
    pub async fn logout(&self) -> anyhow::Result<Route> {
        self.api.session.sign_out().await?;
        Ok(Route::Login { email: None })
    }
}

impl Api {
    /// Returns an API to sign up, sign in and recover accounts.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }
}
