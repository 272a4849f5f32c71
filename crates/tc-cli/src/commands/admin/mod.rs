mod company;
mod list;
mod person;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AdminCommands, CompanyCommands, PersonCommands};
use crate::context::AppContext;

/// Handle `tck admin <subcommand>`.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::Companies => list::companies(ctx, flags).await,
        AdminCommands::Persons => list::persons(ctx, flags).await,
        AdminCommands::Company { action } => match action {
            CompanyCommands::Get { nip } => company::get(nip, ctx, flags).await,
            CompanyCommands::Edit(args) => company::edit(args, ctx, flags).await,
            CompanyCommands::LinkPhone { nip, phone } => {
                company::link_phone(nip, phone, ctx, flags).await
            }
        },
        AdminCommands::Person { action } => match action {
            PersonCommands::Get { id } => person::get(*id, ctx, flags).await,
            PersonCommands::Edit(args) => person::edit(args, ctx, flags).await,
        },
    }
}
