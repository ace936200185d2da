use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the integration with the Photo Quest API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// The URL to access the Photo Quest API.
    pub url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:8081").expect("Cannot parse API URL parameter."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ApiConfig;
    use insta::assert_debug_snapshot;

    #[test]
    fn default() {
        assert_debug_snapshot!(ApiConfig::default(), @r###"
        ApiConfig {
            url: Url {
                scheme: "http",
                cannot_be_a_base: false,
                username: "",
                password: None,
                host: Some(
                    Domain(
                        "localhost",
                    ),
                ),
                port: Some(
                    8081,
                ),
                path: "/",
                query: None,
                fragment: None,
            },
        }
        "###);
    }

    #[test]
    fn deserialization() {
        let config: ApiConfig = toml::from_str(
            r#"
        url = 'https://api.photoquest.app/'
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            ApiConfig {
                url: url::Url::parse("https://api.photoquest.app").unwrap(),
            }
        );
    }
}
