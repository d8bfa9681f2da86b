//! Configuration types for threadbind

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API credential quadruple, supplied via the process environment
///
/// Values are carried as-is and never validated at load time: a missing or
/// rejected credential surfaces as an authentication error on the first API
/// call, not at startup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// OAuth consumer key (`CONSUMER_KEY`)
    #[serde(default)]
    pub consumer_key: String,

    /// OAuth consumer secret (`CONSUMER_SECRET`)
    #[serde(default)]
    pub consumer_secret: String,

    /// OAuth access token (`ACCESS_TOKEN`)
    #[serde(default)]
    pub access_token: String,

    /// OAuth access token secret (`ACCESS_TOKEN_SECRET`)
    #[serde(default)]
    pub access_token_secret: String,
}

/// Main configuration for the thread-to-PDF pipeline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the social-media API (default: the public v1.1 endpoint)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP timeout applied to status lookups and media fetches (default: 30s)
    #[serde(default = "default_http_timeout")]
    pub http_timeout: Duration,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// API credentials
    #[serde(default)]
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            http_timeout: default_http_timeout(),
            user_agent: default_user_agent(),
            credentials: Credentials::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A local `.env` file, if present, is merged into the environment first.
    /// Missing credential variables are left empty rather than rejected here.
    /// `THREADBIND_API_URL` overrides the API base URL when set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let credentials = Credentials {
            consumer_key: env_or_default("CONSUMER_KEY"),
            consumer_secret: env_or_default("CONSUMER_SECRET"),
            access_token: env_or_default("ACCESS_TOKEN"),
            access_token_secret: env_or_default("ACCESS_TOKEN_SECRET"),
        };

        let api_base_url =
            std::env::var("THREADBIND_API_URL").unwrap_or_else(|_| default_api_base_url());

        Self {
            api_base_url,
            http_timeout: default_http_timeout(),
            user_agent: default_user_agent(),
            credentials,
        }
    }
}

fn env_or_default(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

fn default_api_base_url() -> String {
    "https://api.twitter.com/1.1".to_string()
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("threadbind/{}", env!("CARGO_PKG_VERSION"))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const CREDENTIAL_VARS: &[&str] = &[
        "CONSUMER_KEY",
        "CONSUMER_SECRET",
        "ACCESS_TOKEN",
        "ACCESS_TOKEN_SECRET",
    ];

    fn set_var(key: &str, value: &str) {
        // SAFETY: tests in this module run serially and do not spawn threads
        unsafe { std::env::set_var(key, value) };
    }

    fn remove_var(key: &str) {
        // SAFETY: tests in this module run serially and do not spawn threads
        unsafe { std::env::remove_var(key) };
    }

    fn clear_env() {
        for var in CREDENTIAL_VARS {
            remove_var(var);
        }
        remove_var("THREADBIND_API_URL");
    }

    #[test]
    #[serial]
    fn from_env_reads_all_four_credentials() {
        clear_env();
        set_var("CONSUMER_KEY", "ck");
        set_var("CONSUMER_SECRET", "cs");
        set_var("ACCESS_TOKEN", "at");
        set_var("ACCESS_TOKEN_SECRET", "ats");

        let config = Config::from_env();

        assert_eq!(config.credentials.consumer_key, "ck");
        assert_eq!(config.credentials.consumer_secret, "cs");
        assert_eq!(config.credentials.access_token, "at");
        assert_eq!(config.credentials.access_token_secret, "ats");

        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_leaves_missing_credentials_empty() {
        clear_env();

        let config = Config::from_env();

        assert!(
            config.credentials.consumer_key.is_empty(),
            "missing credential should be empty, not an error"
        );
        assert!(config.credentials.access_token_secret.is_empty());
    }

    #[test]
    #[serial]
    fn from_env_honors_base_url_override() {
        clear_env();
        set_var("THREADBIND_API_URL", "http://127.0.0.1:9999/api");

        let config = Config::from_env();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9999/api");

        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_defaults_base_url_when_unset() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.api_base_url, default_api_base_url());
    }

    #[test]
    fn default_config_has_sane_timeout() {
        let config = Config::default();
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("threadbind/"));
    }
}
