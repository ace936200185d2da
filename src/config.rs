mod api_config;
mod http_config;
mod otp_config;
mod raw_config;
mod session_config;

pub use self::{
    api_config::ApiConfig,
    http_config::{HttpClientConfig, HttpConfig},
    otp_config::OtpConfig,
    raw_config::RawConfig,
    session_config::SessionConfig,
};

/// Main client config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the Photo Quest client.
    pub version: String,
    /// Configuration for the Photo Quest API.
    pub api: ApiConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Configuration for the OTP verification flow.
    pub otp: OtpConfig,
    /// Configuration for the client-side session persistence.
    pub session: SessionConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            api: raw_config.api,
            http: raw_config.http,
            otp: raw_config.otp,
            session: raw_config.session,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, RawConfig};

    #[test]
    fn conversion_from_raw_config() {
        let mut raw_config = RawConfig::default();
        raw_config.http.client.max_retries = 0;

        let config = Config::from(raw_config.clone());
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.api, raw_config.api);
        assert_eq!(config.http, raw_config.http);
        assert_eq!(config.otp, raw_config.otp);
        assert_eq!(config.session, raw_config.session);
    }
}
