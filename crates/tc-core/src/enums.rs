//! Closed tagged types shared by the classifier, the report composer, and
//! the submission payload builder.
//!
//! The backend speaks SCREAMING-CASE string tags (`NIP`, `PHONE`, `COMPANY`,
//! `PERSON`, `SCAM`, ...). Each tag set is a single enum here so no call
//! site can invent its own spelling; normalization to the wire happens once,
//! at serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// QueryKind
// ---------------------------------------------------------------------------

/// What a search input classifies as.
///
/// `TaxId` is checked before `Phone`, so a 10-digit phone number written
/// without its country prefix always classifies as `TaxId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKind {
    #[serde(rename = "NIP")]
    TaxId,
    #[serde(rename = "PHONE")]
    Phone,
    #[serde(rename = "UNCLASSIFIED")]
    Unclassified,
}

impl QueryKind {
    /// Wire tag used in redirect targets and report listings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaxId => "NIP",
            Self::Phone => "PHONE",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TargetType
// ---------------------------------------------------------------------------

/// Report target type as the backend expects it.
///
/// There is no `Phone` variant on purpose: the backend stores phone reports
/// under `PERSON`, and the normalization happens in
/// [`crate::entities::report::ReportTarget::wire_parts`] rather than at the
/// call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    Company,
    Person,
}

impl TargetType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "COMPANY",
            Self::Person => "PERSON",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportReason
// ---------------------------------------------------------------------------

/// Reason code attached to a fraud report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportReason {
    /// Fraud or extortion.
    Scam,
    /// Unsolicited phone spam.
    Spam,
    /// Goods paid for but never delivered.
    Towar,
    /// Personal-data leak.
    Rodo,
    Other,
}

impl ReportReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scam => "SCAM",
            Self::Spam => "SPAM",
            Self::Towar => "TOWAR",
            Self::Rodo => "RODO",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ReportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportReason {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "SCAM" => Ok(Self::Scam),
            "SPAM" => Ok(Self::Spam),
            "TOWAR" => Ok(Self::Towar),
            "RODO" => Ok(Self::Rodo),
            "OTHER" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "unknown report reason '{other}' (expected SCAM, SPAM, TOWAR, RODO, or OTHER)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// TrustBand
// ---------------------------------------------------------------------------

/// Display tier derived from a 0-100 trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustBand {
    Trusted,
    Caution,
    Critical,
}

impl TrustBand {
    /// Scores of 70 and above read as trusted, 30 and below as critical.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= 70 {
            Self::Trusted
        } else if score <= 30 {
            Self::Critical
        } else {
            Self::Caution
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::Caution => "caution",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for TrustBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn query_kind_wire_tags() {
        assert_eq!(
            serde_json::to_string(&QueryKind::TaxId).unwrap(),
            "\"NIP\""
        );
        assert_eq!(
            serde_json::to_string(&QueryKind::Phone).unwrap(),
            "\"PHONE\""
        );
        let parsed: QueryKind = serde_json::from_str("\"NIP\"").unwrap();
        assert_eq!(parsed, QueryKind::TaxId);
    }

    #[test]
    fn target_type_wire_tags() {
        assert_eq!(TargetType::Company.as_str(), "COMPANY");
        assert_eq!(
            serde_json::to_string(&TargetType::Person).unwrap(),
            "\"PERSON\""
        );
    }

    #[test]
    fn report_reason_parses_case_insensitively() {
        assert_eq!("scam".parse::<ReportReason>().unwrap(), ReportReason::Scam);
        assert_eq!("RODO".parse::<ReportReason>().unwrap(), ReportReason::Rodo);
        assert!("fraud".parse::<ReportReason>().is_err());
    }

    #[test]
    fn report_reason_serializes_to_backend_tag() {
        assert_eq!(
            serde_json::to_string(&ReportReason::Towar).unwrap(),
            "\"TOWAR\""
        );
    }

    #[test]
    fn trust_band_thresholds() {
        assert_eq!(TrustBand::from_score(100), TrustBand::Trusted);
        assert_eq!(TrustBand::from_score(70), TrustBand::Trusted);
        assert_eq!(TrustBand::from_score(69), TrustBand::Caution);
        assert_eq!(TrustBand::from_score(31), TrustBand::Caution);
        assert_eq!(TrustBand::from_score(30), TrustBand::Critical);
        assert_eq!(TrustBand::from_score(0), TrustBand::Critical);
    }
}
