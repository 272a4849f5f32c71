//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ClientError::Unauthorized`],
//! other non-success → [`ClientError::Api`]) so individual endpoint modules
//! stay focused on request construction and response mapping.

use crate::error::ClientError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → [`ClientError::Unauthorized`] with a login hint.
/// - **Non-success status** → [`ClientError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200)).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_unauthorized() {
        let err = check_response(mock_response(401)).await.unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let err = check_response(mock_response(500)).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
    }
}
