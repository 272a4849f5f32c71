mod latest;
mod new;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

/// Handle `tck report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::New(args) => new::handle(args, ctx, flags).await,
        ReportCommands::Latest { limit } => latest::handle(*limit, ctx, flags).await,
    }
}
