//! Read models for the verification lookup endpoints.

use serde::{Deserialize, Serialize};

use crate::enums::TrustBand;

/// Risk label the backend uses for numbers it has never seen.
pub const RISK_NON_EXISTENT: &str = "Krytyczny (Nie istnieje)";

/// Source tag the backend sets when its own aggregation failed.
pub const SOURCE_ERROR: &str = "ERROR";

/// Aggregated verification result for a tax ID or phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Canonical query value as the server recorded it.
    pub query: String,
    #[serde(default)]
    pub is_phone: bool,
    pub trust_score: u32,
    /// Backend-owned severity label; free text, compare against the
    /// sentinel constants only.
    pub risk_level: String,
    pub source: String,
    #[serde(default)]
    pub company: Option<CompanyRecord>,
    #[serde(default)]
    pub community: Option<CommunitySummary>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VerificationResult {
    #[must_use]
    pub const fn trust_band(&self) -> TrustBand {
        TrustBand::from_score(self.trust_score)
    }

    /// Whether the community has filed at least one report.
    #[must_use]
    pub fn has_reports(&self) -> bool {
        self.community
            .as_ref()
            .is_some_and(|c| c.total_reports > 0)
    }
}

/// Company record associated with a verification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: String,
    /// Canonical tax ID as the server stores it.
    pub nip: String,
    pub vat: String,
    #[serde(default)]
    pub phones: Vec<CompanyPhone>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub reg_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPhone {
    pub id: String,
    pub number: String,
    pub trust_score: u32,
}

/// Community-submitted report summary attached to a verification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySummary {
    pub alerts: u32,
    pub total_reports: u32,
    #[serde(default)]
    pub latest_comments: Vec<ReportSummary>,
}

/// One community report as rendered in a report view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub date: String,
    pub reason: String,
    pub comment: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub reported_email: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub screenshot_path: Option<String>,
}

/// Resolve an evidence reference to something fetchable.
///
/// An absolute URL wins; otherwise the path is joined onto the backend base
/// URL with exactly one slash between them.
#[must_use]
pub fn evidence_source(base_url: &str, path: Option<&str>, url: Option<&str>) -> Option<String> {
    if let Some(url) = url.filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    let path = path.filter(|p| !p.is_empty())?;
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{base}{path}"))
    } else {
        Some(format!("{base}/{path}"))
    }
}

/// OSINT identifiers aggregated across a result's community reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OsintSummary {
    /// Unique phone numbers in report order; for phone lookups the queried
    /// number itself comes first.
    pub phone_numbers: Vec<String>,
    pub email: Option<String>,
    pub profile_link: Option<String>,
    pub bank_account: Option<String>,
    /// Deduplicated, resolved screenshot sources.
    pub screenshots: Vec<String>,
}

impl OsintSummary {
    #[must_use]
    pub fn collect(result: &VerificationResult, base_url: &str) -> Self {
        let comments: &[ReportSummary] = result
            .community
            .as_ref()
            .map_or(&[], |c| c.latest_comments.as_slice());

        let mut phone_numbers: Vec<String> = Vec::new();
        for comment in comments {
            if let Some(number) = comment.phone_number.as_deref()
                && !number.is_empty()
                && !phone_numbers.iter().any(|n| n == number)
            {
                phone_numbers.push(number.to_string());
            }
        }
        if result.is_phone && !phone_numbers.iter().any(|n| *n == result.query) {
            phone_numbers.insert(0, result.query.clone());
        }

        let first = |pick: fn(&ReportSummary) -> Option<&String>| {
            comments
                .iter()
                .find_map(|c| pick(c).filter(|v| !v.is_empty()).cloned())
        };

        let mut screenshots: Vec<String> = Vec::new();
        for comment in comments {
            if let Some(src) = evidence_source(
                base_url,
                comment.screenshot_path.as_deref(),
                comment.screenshot_url.as_deref(),
            ) && !screenshots.contains(&src)
            {
                screenshots.push(src);
            }
        }

        Self {
            phone_numbers,
            email: first(|c| c.reported_email.as_ref()),
            profile_link: first(|c| c.facebook_link.as_ref()),
            bank_account: first(|c| c.bank_account.as_ref()),
            screenshots,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone_numbers.is_empty()
            && self.email.is_none()
            && self.profile_link.is_none()
            && self.bank_account.is_none()
            && self.screenshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "query": "48600700800",
        "isPhone": true,
        "trustScore": 25,
        "riskLevel": "Wysoki",
        "source": "DB",
        "community": {
            "alerts": 2,
            "totalReports": 3,
            "latestComments": [
                {
                    "date": "2025-11-02T10:15:00.000Z",
                    "reason": "SCAM",
                    "comment": "Podszywa sie pod kuriera.",
                    "rating": 1,
                    "phoneNumber": "48600700800",
                    "reportedEmail": "kurier@example.com",
                    "screenshotPath": "uploads/scr-1.png"
                },
                {
                    "date": "2025-11-01T08:00:00.000Z",
                    "reason": "SPAM",
                    "comment": "Glucha sluchawka.",
                    "phoneNumber": "48111222333",
                    "bankAccount": "PL61109010140000071219812874",
                    "screenshotUrl": "https://cdn.example.com/scr-2.png"
                },
                {
                    "date": "2025-10-30T12:00:00.000Z",
                    "reason": "SCAM",
                    "comment": "Duplikat numeru.",
                    "phoneNumber": "48111222333",
                    "screenshotPath": "/uploads/scr-1.png"
                }
            ]
        }
    }"#;

    #[test]
    fn parses_phone_lookup_payload() {
        let result: VerificationResult = serde_json::from_str(FIXTURE).unwrap();
        assert!(result.is_phone);
        assert!(result.company.is_none());
        assert!(result.has_reports());
        assert_eq!(result.trust_band(), TrustBand::Critical);
        let community = result.community.unwrap();
        assert_eq!(community.total_reports, 3);
        assert_eq!(community.latest_comments.len(), 3);
        assert_eq!(community.latest_comments[0].rating, Some(1));
        assert_eq!(community.latest_comments[1].rating, None);
    }

    #[test]
    fn parses_company_lookup_payload() {
        let json = r#"{
            "query": "5252525252",
            "trustScore": 84,
            "riskLevel": "Niski",
            "source": "DB",
            "company": {
                "name": "Januszex Sp. z o.o.",
                "nip": "5252525252",
                "vat": "Czynny",
                "phones": [{"id": "p1", "number": "+48600700800", "trustScore": 60}],
                "address": "ul. Testowa 1, Warszawa"
            }
        }"#;
        let result: VerificationResult = serde_json::from_str(json).unwrap();
        let company = result.company.as_ref().unwrap();
        assert_eq!(company.nip, "5252525252");
        assert_eq!(company.phones.len(), 1);
        assert_eq!(company.reg_date, None);
        assert_eq!(result.trust_band(), TrustBand::Trusted);
    }

    #[test]
    fn osint_summary_dedups_and_orders() {
        let result: VerificationResult = serde_json::from_str(FIXTURE).unwrap();
        let osint = OsintSummary::collect(&result, "http://localhost:3001");

        // Queried number already appears in the comments, so no duplicate
        // is prepended.
        assert_eq!(osint.phone_numbers, vec!["48600700800", "48111222333"]);
        assert_eq!(osint.email.as_deref(), Some("kurier@example.com"));
        assert_eq!(osint.profile_link, None);
        assert_eq!(
            osint.bank_account.as_deref(),
            Some("PL61109010140000071219812874")
        );
        // Relative and absolute spellings of the same upload resolve to one
        // source; the CDN URL passes through untouched.
        assert_eq!(
            osint.screenshots,
            vec![
                "http://localhost:3001/uploads/scr-1.png",
                "https://cdn.example.com/scr-2.png",
            ]
        );
        assert!(!osint.is_empty());
    }

    #[test]
    fn osint_summary_prepends_queried_number() {
        let json = r#"{
            "query": "48999888777",
            "isPhone": true,
            "trustScore": 50,
            "riskLevel": "Sredni",
            "source": "DB",
            "community": {
                "alerts": 0,
                "totalReports": 1,
                "latestComments": [
                    {"date": "2025-10-01T00:00:00.000Z", "reason": "SPAM",
                     "comment": "x", "phoneNumber": "48111222333"}
                ]
            }
        }"#;
        let result: VerificationResult = serde_json::from_str(json).unwrap();
        let osint = OsintSummary::collect(&result, "http://localhost:3001");
        assert_eq!(osint.phone_numbers, vec!["48999888777", "48111222333"]);
    }

    #[test]
    fn evidence_source_prefers_absolute_url() {
        assert_eq!(
            evidence_source("http://localhost:3001", Some("uploads/a.png"), None).as_deref(),
            Some("http://localhost:3001/uploads/a.png")
        );
        assert_eq!(
            evidence_source("http://localhost:3001/", Some("/uploads/a.png"), None).as_deref(),
            Some("http://localhost:3001/uploads/a.png")
        );
        assert_eq!(
            evidence_source(
                "http://localhost:3001",
                Some("uploads/a.png"),
                Some("https://cdn.example.com/a.png")
            )
            .as_deref(),
            Some("https://cdn.example.com/a.png")
        );
        assert_eq!(evidence_source("http://localhost:3001", None, None), None);
    }
}
