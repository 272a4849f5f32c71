use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: Option<String>,
    token_source: Option<&'static str>,
}

pub async fn handle(
    args: &CredentialArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.auth.login(&args.email, &args.password).await?;
    ctx.sessions.store(&session)?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: session.email().map(str::to_string),
            token_source: ctx.sessions.token_source(),
        },
        flags.format,
    )
}
