//! Error types for threadbind
//!
//! Nothing in this crate is caught or recovered below the entry point: every
//! failure propagates with `?` until the binary reports it and exits with a
//! non-zero status. The only distinguished expected branch — a thread with no
//! collectable images — is not an error at all and never reaches this module.

use thiserror::Error;

/// Result type alias for threadbind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for threadbind
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials were missing or rejected by the API (HTTP 401)
    #[error("authentication failed: the API rejected the supplied credentials")]
    Authentication,

    /// The status exists but is not accessible with these credentials (HTTP 403)
    #[error("access denied for status {id}")]
    AccessDenied {
        /// The status id that could not be accessed
        id: String,
    },

    /// No status with the requested id exists (HTTP 404)
    #[error("status {id} not found")]
    StatusNotFound {
        /// The status id that was not found
        id: String,
    },

    /// Any other non-success response from the API or a media host
    #[error("request failed with HTTP {status}: {url}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or transport error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Downloaded bytes are not a decodable image
    #[error("image error: {0}")]
    Decode(#[from] image::ImageError),

    /// PDF serialization error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api_base_url")
        key: Option<String>,
    },
}
