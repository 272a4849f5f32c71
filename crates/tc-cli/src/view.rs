//! Report view assembly shared by `search` and `report new`.
//!
//! Views are read paths: lookup failures collapse into "nothing to show"
//! with a warn-level diagnostic, the same way the search routing treats
//! them.

use serde::Serialize;
use tc_client::{Lookup, VerifyClient};
use tc_core::entities::verification::{
    CompanyRecord, OsintSummary, ReportSummary, VerificationResult,
};
use tc_core::enums::TrustBand;

/// Rendered report view for a company or phone number.
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub query: String,
    pub trust_score: u32,
    pub trust_band: TrustBand,
    pub risk_level: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRecord>,
    pub alerts: u32,
    pub total_reports: u32,
    pub comments: Vec<ReportSummary>,
    /// Aggregated OSINT identifiers; phone views only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osint: Option<OsintSummary>,
}

/// Fetch and render the company report view for a canonical tax ID.
///
/// Returns `None` when there is nothing to show: no record, no company
/// payload, a backend-reported error, or an unreachable backend.
pub async fn company_view(client: &VerifyClient, nip: &str) -> Option<ReportView> {
    match client.search_nip(nip).await {
        Ok(Lookup::Found(result)) if result.error.is_none() && result.company.is_some() => {
            Some(build_view(result, client.base_url(), false))
        }
        Ok(_) => None,
        Err(error) => {
            tracing::warn!(%error, nip, "company view unavailable");
            None
        }
    }
}

/// Fetch and render the phone report view, with OSINT aggregation.
pub async fn phone_view(client: &VerifyClient, number: &str) -> Option<ReportView> {
    match client.search_phone(number).await {
        Ok(Lookup::Found(result)) => Some(build_view(result, client.base_url(), true)),
        Ok(Lookup::NotFound) => None,
        Err(error) => {
            tracing::warn!(%error, number, "phone view unavailable");
            None
        }
    }
}

fn build_view(result: VerificationResult, base_url: &str, with_osint: bool) -> ReportView {
    let osint = with_osint.then(|| OsintSummary::collect(&result, base_url));
    let trust_band = result.trust_band();
    let (alerts, total_reports, comments) = result
        .community
        .map_or((0, 0, Vec::new()), |c| (c.alerts, c.total_reports, c.latest_comments));
    ReportView {
        query: result.query,
        trust_score: result.trust_score,
        trust_band,
        risk_level: result.risk_level,
        source: result.source,
        company: result.company,
        alerts,
        total_reports,
        comments,
        osint,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tc_core::entities::verification::CommunitySummary;

    use super::*;

    fn phone_result() -> VerificationResult {
        VerificationResult {
            query: "48600700800".into(),
            is_phone: true,
            trust_score: 15,
            risk_level: "Wysoki".into(),
            source: "DB".into(),
            company: None,
            community: Some(CommunitySummary {
                alerts: 1,
                total_reports: 2,
                latest_comments: vec![ReportSummary {
                    date: "2025-11-02T10:15:00.000Z".into(),
                    reason: "SCAM".into(),
                    comment: "Falszywy kurier.".into(),
                    rating: Some(1),
                    phone_number: Some("48111222333".into()),
                    reported_email: None,
                    facebook_link: None,
                    bank_account: None,
                    screenshot_url: None,
                    screenshot_path: Some("uploads/scr.png".into()),
                }],
            }),
            error: None,
        }
    }

    #[test]
    fn phone_view_aggregates_osint() {
        let view = build_view(phone_result(), "http://localhost:3001", true);
        assert_eq!(view.trust_band, TrustBand::Critical);
        assert_eq!(view.total_reports, 2);
        let osint = view.osint.expect("phone views carry osint");
        assert_eq!(osint.phone_numbers, vec!["48600700800", "48111222333"]);
        assert_eq!(
            osint.screenshots,
            vec!["http://localhost:3001/uploads/scr.png"]
        );
    }

    #[test]
    fn company_view_skips_osint() {
        let mut result = phone_result();
        result.is_phone = false;
        let view = build_view(result, "http://localhost:3001", false);
        assert!(view.osint.is_none());
        assert_eq!(view.comments.len(), 1);
    }
}
