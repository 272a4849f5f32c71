use serde::Serialize;
use tc_client::Lookup;
use tc_core::entities::admin::PersonPatch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::admin::PersonEditArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct PersonSaveResponse {
    saved: bool,
    id: i64,
    patch: PersonPatch,
}

pub async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.client.admin_person(id).await? {
        Lookup::Found(person) => output(&person, flags.format),
        Lookup::NotFound => anyhow::bail!("person {id} not found"),
    }
}

pub async fn edit(
    args: &PersonEditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.require_session()?;

    let person = match ctx.client.admin_person(args.id).await? {
        Lookup::Found(person) => person,
        Lookup::NotFound => anyhow::bail!("person {} not found", args.id),
    };

    let mut patch = PersonPatch::from(&person);
    if let Some(name) = &args.name {
        patch.name = name.clone();
    }
    if let Some(email) = &args.email {
        patch.email = Some(email.clone());
    }
    if let Some(phone) = &args.phone {
        patch.phone = Some(phone.clone());
    }
    if let Some(bank_account) = &args.bank_account {
        patch.bank_account = Some(bank_account.clone());
    }
    if let Some(score) = args.trust_score {
        patch.trust_score = score;
    }
    if let Some(level) = &args.risk_level {
        patch.risk_level = level.clone();
    }

    ctx.client
        .patch_person(args.id, &patch, &session.access_token)
        .await?;

    output(
        &PersonSaveResponse {
            saved: true,
            id: args.id,
            patch,
        },
        flags.format,
    )
}
