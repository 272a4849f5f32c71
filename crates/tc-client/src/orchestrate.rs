//! Search routing: which view a classified query lands on.
//!
//! An optimistic lookup, then a branch on the result shape: a found company,
//! a phone number with history, or the create-first-report fallthrough.
//! Transport and API failures are collapsed into the fallthrough on purpose;
//! they are logged at warn level and never become a distinct destination.

use serde::Serialize;
use tc_core::entities::verification::{RISK_NON_EXISTENT, SOURCE_ERROR, VerificationResult};
use tc_core::enums::QueryKind;
use tc_core::query::Classified;

use crate::error::ClientError;
use crate::lookup::Lookup;
use crate::VerifyClient;

/// Where a search lands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchDestination {
    /// Company report view, keyed by the canonical tax ID the server
    /// returned, never the user's raw input.
    Company { nip: String },
    /// Phone report view for a number with recorded history.
    Phone { number: String },
    /// Create-first-report view, pre-filled with the cleaned query.
    NewReport { value: String, kind: QueryKind },
}

/// Route a classified query to its destination view.
///
/// Returns `None` for unclassified input: the search action is a no-op and
/// no request is issued.
pub async fn route_search(
    client: &VerifyClient,
    classified: &Classified,
) -> Option<SearchDestination> {
    match classified.kind {
        QueryKind::Unclassified => None,
        QueryKind::TaxId => {
            let outcome = client.search_nip(&classified.cleaned).await;
            Some(route_nip(&classified.cleaned, outcome))
        }
        QueryKind::Phone => {
            let outcome = client.search_phone(&classified.cleaned).await;
            Some(route_phone(&classified.cleaned, outcome))
        }
    }
}

fn route_nip(
    cleaned: &str,
    outcome: Result<Lookup<VerificationResult>, ClientError>,
) -> SearchDestination {
    match outcome {
        Ok(Lookup::Found(result)) => {
            if let Some(company) = result.company {
                return SearchDestination::Company { nip: company.nip };
            }
            new_report(cleaned, QueryKind::TaxId)
        }
        Ok(Lookup::NotFound) => new_report(cleaned, QueryKind::TaxId),
        Err(error) => {
            tracing::warn!(%error, query = cleaned, "tax ID lookup failed; offering first report");
            new_report(cleaned, QueryKind::TaxId)
        }
    }
}

fn route_phone(
    number: &str,
    outcome: Result<Lookup<VerificationResult>, ClientError>,
) -> SearchDestination {
    match outcome {
        Ok(Lookup::Found(result)) if phone_has_history(&result) => SearchDestination::Phone {
            number: number.to_string(),
        },
        Ok(_) => new_report(number, QueryKind::Phone),
        Err(error) => {
            tracing::warn!(%error, number, "phone lookup failed; offering first report");
            new_report(number, QueryKind::Phone)
        }
    }
}

/// A phone result is worth showing when the community has filed reports, or
/// the backend knows the number at all (risk label is not the non-existent
/// sentinel and the source is not the error tag).
fn phone_has_history(result: &VerificationResult) -> bool {
    result.has_reports()
        || (result.risk_level != RISK_NON_EXISTENT && result.source != SOURCE_ERROR)
}

fn new_report(value: &str, kind: QueryKind) -> SearchDestination {
    SearchDestination::NewReport {
        value: value.to_string(),
        kind,
    }
}
