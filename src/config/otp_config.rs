use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, DurationSeconds, serde_as};
use std::time::Duration;

/// Configuration for the OTP verification flow.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OtpConfig {
    /// How long an issued code stays valid. Default is 3 minutes.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub code_lifetime: Duration,
    /// Minimum wait between two consecutive code resend requests. Default is 30 seconds.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub resend_cooldown: Duration,
    /// Resend cooldown applied when the verification view is entered. Default is 0, the code is
    /// issued by the view that navigates to the verification.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub initial_resend_cooldown: Duration,
    /// Delay between successful verification and navigation to the next view. Default is 1 second.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub navigation_delay: Duration,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_lifetime: Duration::from_secs(180),
            resend_cooldown: Duration::from_secs(30),
            initial_resend_cooldown: Duration::ZERO,
            navigation_delay: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::OtpConfig;
    use insta::assert_toml_snapshot;
    use std::time::Duration;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(OtpConfig::default(), @r###"
        code_lifetime = 180
        resend_cooldown = 30
        initial_resend_cooldown = 0
        navigation_delay = 1000
        "###);
    }

    #[test]
    fn deserialization() {
        let config: OtpConfig = toml::from_str(
            r#"
        code_lifetime = 300
        resend_cooldown = 60
        initial_resend_cooldown = 60
        navigation_delay = 500
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            OtpConfig {
                code_lifetime: Duration::from_secs(300),
                resend_cooldown: Duration::from_secs(60),
                initial_resend_cooldown: Duration::from_secs(60),
                navigation_delay: Duration::from_millis(500),
            }
        );
    }
}
