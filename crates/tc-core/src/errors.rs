//! Cross-cutting error types for TrustCheck.
//!
//! Domain-specific errors (e.g., `AuthError`, `ClientError`) are defined in
//! their respective crates. Everything converges on `anyhow` in `tc-cli`.

use thiserror::Error;

/// Errors that can be raised by any TrustCheck crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation before it was allowed near the wire.
    #[error("validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
