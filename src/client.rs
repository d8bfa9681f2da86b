//! HTTP client for the social-media API
//!
//! Two operations are consumed: "get status by id" and "get media bytes by
//! URL". Both ride on a single [`reqwest::Client`] built once at
//! construction.

use crate::config::{Config, Credentials};
use crate::error::{Error, Result};
use crate::types::{Status, StatusId};

/// Client capability for the status-lookup and media-fetch operations
///
/// Constructed explicitly from a [`Config`] and injected into the thread
/// walker; there is no ambient global client state. Credential values are
/// transported on every API request but never validated locally, so a bad or
/// missing credential surfaces as [`Error::Authentication`] on the first call
/// rather than at construction.
pub struct ApiClient {
    /// HTTP client shared by all requests
    http_client: reqwest::Client,

    /// API base URL, normalized without a trailing slash
    api_base_url: String,

    /// Precomputed Authorization header value
    authorization: String,
}

impl ApiClient {
    /// Create a new API client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            http_client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            authorization: authorization_header(&config.credentials),
        })
    }

    /// Look up a status by id.
    ///
    /// Returns the status body with its parent reference and media
    /// attachment list.
    ///
    /// # Errors
    ///
    /// Maps the service's rejection statuses onto the crate taxonomy:
    /// 401 → [`Error::Authentication`], 403 → [`Error::AccessDenied`],
    /// 404 → [`Error::StatusNotFound`]; any other non-success response is
    /// [`Error::Api`]. Transport failures are [`Error::Network`].
    pub async fn get_status(&self, id: &StatusId) -> Result<Status> {
        let url = format!("{}/statuses/show.json", self.api_base_url);
        tracing::debug!(id = %id, "fetching status");

        let response = self
            .http_client
            .get(&url)
            .query(&[("id", id.as_str()), ("tweet_mode", "extended")])
            .header("Authorization", &self.authorization)
            .send()
            .await?;

        let http_status = response.status();
        match http_status.as_u16() {
            401 => return Err(Error::Authentication),
            403 => {
                return Err(Error::AccessDenied {
                    id: id.to_string(),
                });
            }
            404 => {
                return Err(Error::StatusNotFound {
                    id: id.to_string(),
                });
            }
            _ if !http_status.is_success() => {
                return Err(Error::Api {
                    status: http_status.as_u16(),
                    url,
                });
            }
            _ => {}
        }

        let body = response.bytes().await?;
        let status: Status = serde_json::from_slice(&body)?;
        Ok(status)
    }

    /// Fetch the raw bytes behind a media URL.
    ///
    /// # Errors
    ///
    /// Non-success responses are [`Error::Api`]; transport failures are
    /// [`Error::Network`].
    pub async fn get_media_bytes(&self, url: &str) -> Result<Vec<u8>> {
        tracing::info!(url = %url, "fetching media");

        let response = self.http_client.get(url).send().await?;

        let http_status = response.status();
        if !http_status.is_success() {
            return Err(Error::Api {
                status: http_status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Build the `OAuth` Authorization header value from the credential quadruple.
///
/// Credential verification is the service's contract; this client only
/// transports the four values it was configured with.
fn authorization_header(credentials: &Credentials) -> String {
    format!(
        "OAuth oauth_consumer_key=\"{}\", oauth_consumer_secret=\"{}\", \
         oauth_token=\"{}\", oauth_token_secret=\"{}\"",
        credentials.consumer_key,
        credentials.consumer_secret,
        credentials.access_token,
        credentials.access_token_secret,
    )
}
