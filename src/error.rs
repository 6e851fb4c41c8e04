//! Error types for the Correios client.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for all Correios client operations.
pub enum Error {
    /// Underlying HTTP client error (connection, TLS, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The endpoint could not be parsed as a URL.
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// HTTP response returned a non-success status with body.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The response body is not a well-formed quote document.
    #[error("parse error: {0}")]
    Parse(String),
    /// A request parameter name outside the known field set.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// A service name or code that is not in the catalog.
    #[error("unknown service: {0}")]
    UnknownService(String),
}

/// Result type for Correios client operations.
pub type Result<T> = std::result::Result<T, Error>;
