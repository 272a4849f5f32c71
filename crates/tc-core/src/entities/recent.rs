//! Latest community reports, as listed on the landing surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::QueryKind;

/// One row from `GET /reports/latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentReport {
    pub id: i64,
    pub target_value: String,
    pub target_type: QueryKind,
    pub trust_score: u32,
    pub rating: u8,
    pub reason: String,
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_listing_row() {
        let json = r#"{
            "id": 17,
            "targetValue": "5252525252",
            "targetType": "NIP",
            "trustScore": 12,
            "rating": 1,
            "reason": "SCAM",
            "comment": "Faktura bez pokrycia.",
            "date": "2025-11-02T10:15:00.000Z"
        }"#;
        let report: RecentReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.target_type, QueryKind::TaxId);
        assert_eq!(report.date.timestamp(), 1_762_078_500);
    }
}
