use crate::{error::Error as PhotoQuestError, session::SessionContext};
use anyhow::{anyhow, bail};
use reqwest::{Response, StatusCode};
use reqwest_middleware::RequestBuilder;
use serde_derive::Deserialize;

/// Describes how the request should be authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Use the session token, if there is one.
    Session,
    /// Use the specified bearer token, the session isn't affected by the response.
    Token(String),
    /// Public endpoint, no authorization.
    Anonymous,
}

/// JSON body of the unsuccessful response.
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Attaches session token as a bearer token when the session has one. Returns decorated request
/// and a flag indicating whether the token was attached.
pub async fn with_bearer_token(
    request: RequestBuilder,
    session: &SessionContext,
) -> (RequestBuilder, bool) {
    match session.token().await {
        Some(token) => (request.bearer_auth(token), true),
        None => (request, false),
    }
}

/// Invalidates the session when the API rejects the attached session token.
pub async fn invalidate_on_unauthorized(
    response: Response,
    session: &SessionContext,
    token_attached: bool,
) -> anyhow::Result<Response> {
    if response.status() != StatusCode::UNAUTHORIZED || !token_attached {
        return Ok(response);
    }

    session.invalidate().await?;
    bail!(PhotoQuestError::unauthorized())
}

/// Turns any unsuccessful response into an error, preserving the server-reported message.
pub async fn reject_unsuccessful(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(ErrorResponse { error }) => {
            tracing::debug!(status = status.as_u16(), "Photo Quest API rejected request: {error}");
            bail!(PhotoQuestError::rejected(error))
        }
        Err(_) => Err(anyhow!(
            "Photo Quest API request failed with HTTP status {status}: {body}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::Credentials,
        error::{Error as PhotoQuestError, ErrorKind},
        session::SessionData,
        tests::{mock_api, mock_api_with_session, mock_user},
        users::UserRole,
    };
    use httpmock::MockServer;
    use serde_json::json;

    fn signed_in_session() -> SessionData {
        SessionData {
            token: Some("some-token".to_string()),
            role: Some(UserRole::User),
            user: Some(mock_user()),
        }
    }

    #[tokio::test]
    async fn attaches_session_token() -> anyhow::Result<()> {
        let server = MockServer::start();
        let profile_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET)
                .path("/profile")
                .header("authorization", "Bearer some-token");
            then.status(200).json_body(json!({ "ok": true }));
        });

        let api = mock_api_with_session(&server.base_url(), signed_in_session());
        let response = api
            .execute(
                api.network.http_client.get(api.endpoint("profile")),
                Credentials::Session,
            )
            .await?;
        assert_eq!(response.status(), 200);
        profile_mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn invalidates_session_on_unauthorized() -> anyhow::Result<()> {
        let server = MockServer::start();
        let profile_mock = server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/profile");
            then.status(401).json_body(json!({ "error": "Invalid token" }));
        });

        let api = mock_api_with_session(&server.base_url(), signed_in_session());
        let mut events = api.session.subscribe();

        let error = PhotoQuestError::from(
            api.execute(
                api.network.http_client.get(api.endpoint("profile")),
                Credentials::Session,
            )
            .await
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
        assert!(!api.session.is_authenticated().await);
        assert!(events.try_recv().is_ok());
        profile_mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn keeps_session_on_unauthorized_without_token() -> anyhow::Result<()> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/auth/login");
            then.status(401).json_body(json!({ "error": "Wrong password" }));
        });

        let api = mock_api(&server.base_url());
        let mut events = api.session.subscribe();

        let error = PhotoQuestError::from(
            api.execute(
                api.network.http_client.post(api.endpoint("auth/login")),
                Credentials::Anonymous,
            )
            .await
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Rejected);
        assert_eq!(error.user_message(), "Wrong password");
        assert!(events.try_recv().is_err());

        Ok(())
    }

    #[tokio::test]
    async fn surfaces_server_error_verbatim() -> anyhow::Result<()> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST).path("/auth/verify-otp");
            then.status(400)
                .json_body(json!({ "error": "OTP has expired. Please request a new one." }));
        });

        let api = mock_api(&server.base_url());
        let error = PhotoQuestError::from(
            api.execute(
                api.network.http_client.post(api.endpoint("auth/verify-otp")),
                Credentials::Anonymous,
            )
            .await
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Rejected);
        assert_eq!(
            error.user_message(),
            "OTP has expired. Please request a new one."
        );

        Ok(())
    }

    #[tokio::test]
    async fn classifies_unstructured_errors_as_unknown() -> anyhow::Result<()> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::GET).path("/leaderboard");
            then.status(500).body("Internal Server Error");
        });

        let api = mock_api(&server.base_url());
        let error = PhotoQuestError::from(
            api.execute(
                api.network.http_client.get(api.endpoint("leaderboard")),
                Credentials::Session,
            )
            .await
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Unknown);
        assert_eq!(error.user_message(), "Something went wrong. Please try again.");

        Ok(())
    }

    #[tokio::test]
    async fn classifies_connection_errors_as_transport() -> anyhow::Result<()> {
        let api = mock_api("http://127.0.0.1:1");
        let error = PhotoQuestError::from(
            api.execute(
                api.network.http_client.get(api.endpoint("leaderboard")),
                Credentials::Session,
            )
            .await
            .unwrap_err(),
        );
        assert_eq!(error.kind(), ErrorKind::Transport);

        Ok(())
    }
}
