//! Error types for the table client.

use thiserror::Error;

/// Errors produced while configuring or running table operations.
///
/// Configuration problems (`InvalidUrl`, `UnsupportedScheme`,
/// `InvalidCredential`, `MasterKeyRequired`) are reported before any network
/// I/O. `Transport` wraps failures raised by the HTTP layer itself (DNS,
/// connection refused, TLS); non-success HTTP statuses are never errors and
/// are reported through the operation return values instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service address is not a parseable absolute URL.
    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service address uses a scheme other than http or https.
    #[error("service URL must use http or https, got {0}")]
    UnsupportedScheme(String),

    /// A configured key cannot be carried as an HTTP header value.
    #[error("credential is not a valid header value: {0}")]
    InvalidCredential(#[from] reqwest::header::InvalidHeaderValue),

    /// `noscript` was requested on a client configured without a master key.
    #[error("noscript requires the master key")]
    MasterKeyRequired,

    /// The underlying transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;
