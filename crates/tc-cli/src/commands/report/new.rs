use serde::Serialize;
use tc_core::entities::report::{ReportDraft, ReportTarget};
use tc_core::enums::{ReportReason, TargetType};
use tc_core::query::normalize_query;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::report::ReportNewArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::view::{self, ReportView};

#[derive(Serialize)]
struct ReportNewResponse {
    submitted: bool,
    target_type: TargetType,
    target_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    screenshot_path: Option<String>,
    /// The report view the submission lands on, freshly fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ReportView>,
}

pub async fn handle(
    args: &ReportNewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Session first: an anonymous draft must fail with the login hint
    // before any network call, upload included.
    let session = ctx.require_session()?;

    let reason: ReportReason = args.reason.parse()?;
    let target = if let Some(nip) = &args.nip {
        ReportTarget::Company {
            nip: normalize_query(nip),
            company_name: args.company_name.clone(),
        }
    } else {
        ReportTarget::Person {
            name: args.name.clone(),
            phone: args.phone.clone(),
        }
    };

    let draft = ReportDraft {
        target,
        rating: args.rating,
        reason,
        comment: args.comment.clone(),
        reported_email: args.email.clone(),
        facebook_link: args.profile_link.clone(),
        bank_account: args.bank_account.clone(),
    };

    let submission = ctx
        .client
        .submit_with_evidence(draft, args.screenshot.as_deref(), &session.access_token)
        .await?;

    let report = match submission.target_type {
        TargetType::Company => view::company_view(&ctx.client, &submission.target_value).await,
        TargetType::Person => view::phone_view(&ctx.client, &submission.target_value).await,
    };

    output(
        &ReportNewResponse {
            submitted: true,
            target_type: submission.target_type,
            target_value: submission.target_value,
            screenshot_path: submission.screenshot_path,
            report,
        },
        flags.format,
    )
}
