//! # tc-client
//!
//! HTTP client for the TrustCheck verification backend.
//!
//! All real state lives behind the backend's REST surface; this crate is the
//! one place that knows its endpoints:
//! - verification lookups by tax ID and phone number (with the search
//!   routing that decides which view a query lands on)
//! - community report submission and the latest-reports listing
//! - evidence (screenshot) upload
//! - admin-scoped entity reads, PATCHes, and phone linking
//!
//! Read paths return [`Lookup`] so "nothing found" and "couldn't be reached"
//! stay distinguishable; write paths propagate [`ClientError`] as hard
//! failures.

pub mod admin;
pub mod lookup;
pub mod orchestrate;
pub mod reports;
pub mod upload;

mod error;
mod http;

pub use error::ClientError;
pub use lookup::Lookup;
pub use orchestrate::{SearchDestination, route_search};

use tc_config::BackendConfig;

/// HTTP client for the verification backend.
pub struct VerifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl VerifyClient {
    /// Create a client for the configured backend.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("trustcheck/0.1")
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.base().to_string(),
        }
    }

    /// Backend base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET with caching disabled, so reads always observe fresh server
    /// state.
    fn get_fresh(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(path))
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
    }
}
