//! Community report submission and the latest-reports listing.

use std::path::Path;

use tc_core::entities::recent::RecentReport;
use tc_core::entities::report::{ReportDraft, ReportSubmission};

use crate::error::ClientError;
use crate::http::check_response;
use crate::VerifyClient;

impl VerifyClient {
    /// Submit a composed report payload.
    ///
    /// Callers must hold a session token; the parameter makes it impossible
    /// to reach this endpoint anonymously.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or any non-success
    /// status; the draft is left with the caller for a manual retry.
    pub async fn submit_report(
        &self,
        submission: &ReportSubmission,
        token: &str,
    ) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(self.url("/reports"))
            .bearer_auth(token)
            .json(submission)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Validate a draft, upload its evidence if any, then submit.
    ///
    /// The upload must complete first: the report payload references the
    /// path the storage endpoint assigns. An upload failure therefore blocks
    /// the submission instead of degrading it. Returns the submitted payload
    /// so callers can navigate to the matching report view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] without any network traffic when the
    /// draft is missing its primary identifier; otherwise propagates upload
    /// and submission failures.
    pub async fn submit_with_evidence(
        &self,
        draft: ReportDraft,
        screenshot: Option<&Path>,
        token: &str,
    ) -> Result<ReportSubmission, ClientError> {
        draft.validate()?;

        let screenshot_path = match screenshot {
            Some(file) => Some(self.upload_screenshot(file, token).await?.path),
            None => None,
        };

        let submission = draft.into_submission(screenshot_path);
        self.submit_report(&submission, token).await?;
        Ok(submission)
    }

    /// Fetch the most recent community reports.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status;
    /// callers rendering a landing surface typically degrade this to an
    /// empty list.
    pub async fn latest_reports(&self) -> Result<Vec<RecentReport>, ClientError> {
        let resp = self.get_fresh("/reports/latest").send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}
