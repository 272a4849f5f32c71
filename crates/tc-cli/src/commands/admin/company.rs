use serde::Serialize;
use tc_client::Lookup;
use tc_core::entities::admin::{AdminCompany, CompanyPatch};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::CompanyEditArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct CompanySaveResponse {
    saved: bool,
    nip: String,
    patch: CompanyPatch,
}

#[derive(Serialize)]
struct LinkPhoneResponse {
    linked: bool,
    company: AdminCompany,
}

pub async fn get(nip: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.client.admin_company(nip).await? {
        Lookup::Found(company) => output(&company, flags.format),
        Lookup::NotFound => anyhow::bail!("company {nip} not found"),
    }
}

/// Fetch the full record, overlay the provided fields, and PATCH the fixed
/// allow-list back, never the raw local copy.
pub async fn edit(
    args: &CompanyEditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;

    let company = match ctx.client.admin_company(&args.nip).await? {
        Lookup::Found(company) => company,
        Lookup::NotFound => anyhow::bail!("company {} not found", args.nip),
    };

    let mut patch = CompanyPatch::from(&company);
    if let Some(name) = &args.name {
        patch.name = name.clone();
    }
    if let Some(score) = args.trust_score {
        patch.trust_score = score;
    }
    if let Some(level) = &args.risk_level {
        patch.risk_level = level.clone();
    }
    if let Some(vat) = &args.status_vat {
        patch.status_vat = vat.clone();
    }
    if let Some(address) = &args.address {
        patch.address = Some(address.clone());
    }
    if let Some(reg_date) = &args.reg_date {
        patch.reg_date = Some(reg_date.clone());
    }
    if let Some(source) = &args.source {
        patch.source = Some(source.clone());
    }
    if let Some(notes) = &args.notes {
        patch.notes = Some(notes.clone());
    }

    ctx.client
        .patch_company(&args.nip, &patch, &session.access_token)
        .await?;

    output(
        &CompanySaveResponse {
            saved: true,
            nip: args.nip.clone(),
            patch,
        },
        flags.format,
    )
}

/// Link a phone number to a company; the refreshed record in the response
/// is the re-fetch, not a local guess.
pub async fn link_phone(
    nip: &str,
    phone: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;

    match ctx
        .client
        .link_phone(nip, phone, &session.access_token)
        .await?
    {
        Lookup::Found(company) => output(
            &LinkPhoneResponse {
                linked: true,
                company,
            },
            flags.format,
        ),
        Lookup::NotFound => anyhow::bail!("company {nip} vanished after linking"),
    }
}
