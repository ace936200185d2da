use crate::{
    api::Api,
    auth::{VerifyOtpParams, VerifyOtpResponse},
};
use std::future::Future;

/// Network operations the OTP verification depends on.
pub trait OtpBackend: Clone + Send + Sync + 'static {
    /// Verifies the code entered by the user.
    fn verify_otp(
        &self,
        params: VerifyOtpParams,
    ) -> impl Future<Output = anyhow::Result<VerifyOtpResponse>> + Send;

    /// Issues a new code for the specified email.
    fn request_code(&self, email: String) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl OtpBackend for Api {
    async fn verify_otp(&self, params: VerifyOtpParams) -> anyhow::Result<VerifyOtpResponse> {
        self.auth().verify_otp(&params).await
    }

    async fn request_code(&self, email: String) -> anyhow::Result<()> {
        self.auth().request_code(&email).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        auth::{VerifyOtpParams, VerifyOtpResponse},
        otp::OtpBackend,
        tests::mock_api,
    };
    use httpmock::MockServer;
    use serde_json::json;

    #[tokio::test]
    async fn api_verifies_and_requests_codes() -> anyhow::Result<()> {
        let server = MockServer::start();
        let verify_mock = server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/auth/verify-otp")
                .json_body(json!({ "email": "user@test.com", "code": "441225", "isPasswordReset": true }));
            then.status(200)
                .json_body(json!({ "message": "OTP verified", "token": "reset-token" }));
        });
        let request_mock = server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/auth/forgot-password")
                .json_body(json!({ "email": "user@test.com" }));
            then.status(200).json_body(json!({ "message": "OTP sent" }));
        });

        let api = mock_api(&server.base_url());
        assert_eq!(
            OtpBackend::verify_otp(
                &api,
                VerifyOtpParams {
                    email: "user@test.com".to_string(),
                    code: "441225".to_string(),
                    is_password_reset: true,
                }
            )
            .await?,
            VerifyOtpResponse {
                message: Some("OTP verified".to_string()),
                token: Some("reset-token".to_string()),
            }
        );
        OtpBackend::request_code(&api, "user@test.com".to_string()).await?;

        verify_mock.assert();
        request_mock.assert();

        Ok(())
    }
}
