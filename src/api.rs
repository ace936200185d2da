mod decorators;

pub use self::decorators::{
    Credentials, invalidate_on_unauthorized, reject_unsuccessful, with_bearer_token,
};

use crate::{config::Config, error::Error as PhotoQuestError, network::Network, session::SessionContext};
use anyhow::Context;
use reqwest::Response;
use reqwest_middleware::RequestBuilder;
use serde::de::DeserializeOwned;

/// Photo Quest API client, individual resources are exposed as sub-APIs.
#[derive(Clone)]
pub struct Api {
    pub config: Config,
    pub network: Network,
    pub session: SessionContext,
}

impl Api {
    /// Instantiates APIs collection with the specified config, network and session.
    pub fn new(config: Config, network: Network, session: SessionContext) -> Self {
        Self {
            config,
            network,
            session,
        }
    }

    /// Builds absolute URL of the API endpoint with the specified path.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.api.url)
    }

    /// Sends request decorated with the specified credentials and returns successful response.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        credentials: Credentials,
    ) -> anyhow::Result<Response> {
        let (request, token_attached) = match credentials {
            Credentials::Session => with_bearer_token(request, &self.session).await,
            Credentials::Token(token) => (request.bearer_auth(token), false),
            Credentials::Anonymous => (request, false),
        };

        let response = request.send().await.map_err(|err| {
            tracing::error!("Failed to send request to Photo Quest API: {err:?}");
            PhotoQuestError::transport(err.into())
        })?;

        let response = invalidate_on_unauthorized(response, &self.session, token_attached).await?;
        reject_unsuccessful(response).await
    }

    /// Sends request and deserializes JSON body of the successful response.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        credentials: Credentials,
    ) -> anyhow::Result<T> {
        self.execute(request, credentials)
            .await?
            .json::<T>()
            .await
            .context("Cannot deserialize Photo Quest API response.")
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
