use crate::config::HttpClientConfig;
use anyhow::Context;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

/// Network utilities.
#[derive(Clone)]
pub struct Network {
    /// HTTP client used for requests that change server state, never retried.
    pub http_client: ClientWithMiddleware,
    /// HTTP client used for read-only requests, retried on transient failures.
    pub retrying_http_client: ClientWithMiddleware,
}

impl Network {
    /// Creates a new `Network` instance with HTTP clients configured from the specified config.
    pub fn new(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .connection_verbose(config.verbose)
            .build()
            .context("Cannot build HTTP client.")?;

        let http_client = ClientBuilder::new(client.clone())
            .with(TracingMiddleware::default())
            .build();

        let retrying_http_client = if config.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
            ClientBuilder::new(client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build()
        } else {
            http_client.clone()
        };

        Ok(Self {
            http_client,
            retrying_http_client,
        })
    }
}
