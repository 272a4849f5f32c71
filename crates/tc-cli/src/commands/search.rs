use serde::Serialize;
use tc_client::{SearchDestination, route_search};
use tc_core::enums::QueryKind;
use tc_core::query::classify;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::view::{self, ReportView};

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    cleaned: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detected: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<SearchDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ReportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let classified = classify(&args.query);
    let detected =
        (classified.kind != QueryKind::Unclassified).then(|| classified.kind.as_str());

    // Unclassified input is a no-op: no request leaves the machine.
    let Some(destination) = route_search(&ctx.client, &classified).await else {
        return output(
            &SearchResponse {
                query: args.query.clone(),
                cleaned: classified.cleaned,
                detected,
                destination: None,
                report: None,
                note: Some(
                    "input is neither a tax ID nor a phone number; nothing was searched".into(),
                ),
            },
            flags.format,
        );
    };

    let (report, note) = match &destination {
        SearchDestination::Company { nip } => (view::company_view(&ctx.client, nip).await, None),
        SearchDestination::Phone { number } => (view::phone_view(&ctx.client, number).await, None),
        SearchDestination::NewReport { value, kind } => {
            let prefill = match kind {
                QueryKind::Phone => format!("--phone {value}"),
                _ => format!("--nip {value}"),
            };
            (
                None,
                Some(format!(
                    "no records for {value}; file the first report with `tck report new {prefill} --comment ...`"
                )),
            )
        }
    };

    output(
        &SearchResponse {
            query: args.query.clone(),
            cleaned: classified.cleaned,
            detected,
            destination: Some(destination),
            report,
            note,
        },
        flags.format,
    )
}
