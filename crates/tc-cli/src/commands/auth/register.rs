use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthRegisterResponse {
    registered: bool,
    authenticated: bool,
    email: Option<String>,
}

pub async fn handle(
    args: &CredentialArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.auth.register(&args.email, &args.password).await?;
    ctx.sessions.store(&session)?;

    output(
        &AuthRegisterResponse {
            registered: true,
            authenticated: true,
            email: session.email().map(str::to_string),
        },
        flags.format,
    )
}
