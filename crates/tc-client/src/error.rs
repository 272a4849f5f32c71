//! Client error types.

use tc_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the verification backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Backend rejected the bearer token.
    #[error("backend rejected the session token — run `tck auth login`")]
    Unauthorized,

    /// Payload failed client-side validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// A local file could not be read for upload.
    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
