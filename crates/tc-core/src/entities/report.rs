//! Report submission payloads and the composer-side target model.

use serde::{Deserialize, Serialize};

use crate::enums::{ReportReason, TargetType};
use crate::errors::CoreError;

/// Who a report is filed against.
///
/// The composer works in terms of this enum; the backend's
/// `targetType`/`targetValue`/`scammerName` triple is derived in one place,
/// [`ReportTarget::wire_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// A company, identified by tax ID.
    Company {
        nip: String,
        company_name: Option<String>,
    },
    /// A private person or phone number; at least one identifier required.
    Person {
        name: Option<String>,
        phone: Option<String>,
    },
}

impl ReportTarget {
    /// Reject targets that are missing their primary identifier.
    ///
    /// This runs before any network call; a draft that fails here never
    /// reaches the upload or submission endpoints.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Company { nip, .. } => {
                if nip.trim().is_empty() {
                    return Err(CoreError::Validation(
                        "company reports require a tax ID (NIP)".into(),
                    ));
                }
                Ok(())
            }
            Self::Person { name, phone } => {
                let has_name = name.as_deref().is_some_and(|n| !n.trim().is_empty());
                let has_phone = phone.as_deref().is_some_and(|p| !p.trim().is_empty());
                if has_name || has_phone {
                    Ok(())
                } else {
                    Err(CoreError::Validation(
                        "person reports require a name or a phone number".into(),
                    ))
                }
            }
        }
    }

    /// Normalize to the wire triple: target type, target value, scammer name.
    ///
    /// Person targets fall back to the phone number as the target value when
    /// no name was given; phone-shaped targets are stored as `PERSON`.
    #[must_use]
    pub fn wire_parts(&self) -> (TargetType, String, Option<String>) {
        match self {
            Self::Company { nip, company_name } => (
                TargetType::Company,
                nip.clone(),
                non_empty(company_name.clone()),
            ),
            Self::Person { name, phone } => {
                let name = non_empty(name.clone());
                let value = name
                    .clone()
                    .or_else(|| non_empty(phone.clone()))
                    .unwrap_or_default();
                (TargetType::Person, value, name)
            }
        }
    }

    /// The phone number carried by a person target, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::Company { .. } => None,
            Self::Person { phone, .. } => phone.as_deref().filter(|p| !p.is_empty()),
        }
    }
}

/// A report as composed locally, before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub target: ReportTarget,
    /// 1 = outright scam, 5 = trustworthy.
    pub rating: u8,
    pub reason: ReportReason,
    pub comment: String,
    pub reported_email: Option<String>,
    pub facebook_link: Option<String>,
    pub bank_account: Option<String>,
}

impl ReportDraft {
    /// Validate the draft without touching the network.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.target.validate()?;
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::Validation(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        if self.comment.trim().is_empty() {
            return Err(CoreError::Validation("a report needs a comment".into()));
        }
        Ok(())
    }

    /// Build the wire payload, attaching an evidence path if one was
    /// uploaded beforehand.
    #[must_use]
    pub fn into_submission(self, screenshot_path: Option<String>) -> ReportSubmission {
        let (target_type, target_value, scammer_name) = self.target.wire_parts();
        let phone_number = self.target.phone().map(str::to_string);
        ReportSubmission {
            target_type,
            target_value,
            scammer_name,
            rating: self.rating,
            reason: self.reason,
            comment: self.comment,
            phone_number,
            reported_email: non_empty(self.reported_email),
            facebook_link: non_empty(self.facebook_link),
            bank_account: non_empty(self.bank_account),
            screenshot_path,
        }
    }
}

/// Write-only payload for `POST /reports`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubmission {
    pub target_type: TargetType,
    pub target_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scammer_name: Option<String>,
    pub rating: u8,
    pub reason: ReportReason,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<String>,
}

/// Server-assigned reference returned by the evidence upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedEvidence {
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn person_draft(name: Option<&str>, phone: Option<&str>) -> ReportDraft {
        ReportDraft {
            target: ReportTarget::Person {
                name: name.map(str::to_string),
                phone: phone.map(str::to_string),
            },
            rating: 1,
            reason: ReportReason::Scam,
            comment: "Wyludzenie zaliczki.".into(),
            reported_email: None,
            facebook_link: None,
            bank_account: None,
        }
    }

    #[test]
    fn company_target_requires_nip() {
        let target = ReportTarget::Company {
            nip: "  ".into(),
            company_name: Some("Januszex".into()),
        };
        assert!(target.validate().is_err());
    }

    #[test]
    fn person_target_requires_name_or_phone() {
        assert!(person_draft(None, None).validate().is_err());
        assert!(person_draft(Some("Jan Kowalski"), None).validate().is_ok());
        assert!(person_draft(None, Some("48600700800")).validate().is_ok());
    }

    #[test]
    fn rating_and_comment_are_validated() {
        let mut draft = person_draft(Some("Jan"), None);
        draft.rating = 0;
        assert!(draft.validate().is_err());
        draft.rating = 6;
        assert!(draft.validate().is_err());
        draft.rating = 3;
        draft.comment = "   ".into();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn person_falls_back_to_phone_as_target_value() {
        let (target_type, value, scammer) = ReportTarget::Person {
            name: None,
            phone: Some("48600700800".into()),
        }
        .wire_parts();
        assert_eq!(target_type, TargetType::Person);
        assert_eq!(value, "48600700800");
        assert_eq!(scammer, None);
    }

    #[test]
    fn person_name_wins_over_phone() {
        let (_, value, scammer) = ReportTarget::Person {
            name: Some("Jan Kowalski".into()),
            phone: Some("48600700800".into()),
        }
        .wire_parts();
        assert_eq!(value, "Jan Kowalski");
        assert_eq!(scammer.as_deref(), Some("Jan Kowalski"));
    }

    #[test]
    fn submission_carries_exact_upload_path() {
        let submission = person_draft(None, Some("48600700800"))
            .into_submission(Some("uploads/scr-99.png".into()));
        assert_eq!(submission.screenshot_path.as_deref(), Some("uploads/scr-99.png"));
        assert_eq!(submission.phone_number.as_deref(), Some("48600700800"));
    }

    #[test]
    fn submission_wire_shape_is_camel_case() {
        let submission = ReportDraft {
            target: ReportTarget::Company {
                nip: "5252525252".into(),
                company_name: Some("Januszex Sp. z o.o.".into()),
            },
            rating: 1,
            reason: ReportReason::Towar,
            comment: "Brak towaru.".into(),
            reported_email: Some("sklep@example.com".into()),
            facebook_link: None,
            bank_account: Some("".into()),
        }
        .into_submission(None);

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["targetType"], "COMPANY");
        assert_eq!(json["targetValue"], "5252525252");
        assert_eq!(json["scammerName"], "Januszex Sp. z o.o.");
        assert_eq!(json["reason"], "TOWAR");
        assert_eq!(json["reportedEmail"], "sklep@example.com");
        // Empty OSINT fields are dropped, not sent as empty strings.
        assert!(json.get("bankAccount").is_none());
        assert!(json.get("screenshotPath").is_none());
    }
}
