//! Global error types for the Pushbullet client.
//!
//! All error categories are unified into a single `PbError` enum with
//! conversions from underlying library errors. The original Salt modules
//! swallowed most failures by returning the raw response envelope; here each
//! failure mode is a distinct variant so callers can branch on it.

use thiserror::Error;

/// Convenience type alias for Results using PbError.
pub type PbResult<T> = Result<T, PbError>;

/// Unified error type covering all error categories in the Pushbullet client.
#[derive(Error, Debug)]
pub enum PbError {
    // -- Configuration errors --
    /// Failed to load or parse the configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required configuration value is missing.
    ///
    /// Returned when the access token is absent; no operation runs and no
    /// network request is attempted in that state.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    // -- Network errors --
    /// HTTP transport failure (connection refused, DNS, TLS, ...).
    #[error("http error: {0}")]
    Http(String),

    /// HTTP request timed out.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The API rejected the request with a non-2xx status.
    #[error("remote rejected request (status {status}): {message}")]
    RemoteRejected {
        /// HTTP status code.
        status: u16,
        /// Response body text for diagnostics.
        message: String,
    },

    /// The API answered 2xx but the response lacked the expected JSON body.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    // -- Generic --
    /// Wrapping anyhow errors for interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for PbError {
    fn from(e: serde_json::Error) -> Self {
        PbError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for PbError {
    fn from(e: toml::de::Error) -> Self {
        PbError::Config(e.to_string())
    }
}
