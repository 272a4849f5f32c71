use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    user_id: Option<i64>,
    token_source: Option<&'static str>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match ctx.sessions.current() {
        Some(session) => AuthStatusResponse {
            authenticated: true,
            email: session.email().map(str::to_string),
            user_id: session.user.as_ref().and_then(|u| u.id),
            token_source: ctx.sessions.token_source(),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            email: None,
            user_id: None,
            token_source: None,
            note: Some("no stored session — run `tck auth login`".into()),
        },
    };

    output(&status, flags.format)
}
