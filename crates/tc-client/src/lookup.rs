//! Verification lookups by tax ID and phone number.

use tc_core::entities::verification::VerificationResult;

use crate::error::ClientError;
use crate::http::check_response;
use crate::VerifyClient;

/// Outcome of a read-path lookup.
///
/// "Nothing found" and "couldn't be reached" are distinct: the latter is the
/// `Err` arm of the surrounding `Result`, so callers can decide whether to
/// show an empty state or suggest a retry. The search router deliberately
/// collapses both into the create-first-report fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    /// The found value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl VerifyClient {
    /// Look up a company by cleaned tax ID.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails in transport, the
    /// backend returns a non-success status other than 404, or the response
    /// cannot be parsed.
    pub async fn search_nip(
        &self,
        query: &str,
    ) -> Result<Lookup<VerificationResult>, ClientError> {
        let path = format!("/verification/search?query={}", urlencoding::encode(query));
        self.fetch_lookup(&path).await
    }

    /// Look up the report history for a cleaned phone number.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::search_nip`].
    pub async fn search_phone(
        &self,
        number: &str,
    ) -> Result<Lookup<VerificationResult>, ClientError> {
        let path = format!("/verification/phone/{}", urlencoding::encode(number));
        self.fetch_lookup(&path).await
    }

    async fn fetch_lookup(
        &self,
        path: &str,
    ) -> Result<Lookup<VerificationResult>, ClientError> {
        let resp = self.get_fresh(path).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        let resp = check_response(resp).await?;
        let result: VerificationResult = resp.json().await?;
        Ok(Lookup::Found(result))
    }
}
