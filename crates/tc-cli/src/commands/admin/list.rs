use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn companies(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rows = ctx.client.admin_companies().await?;
    if let Some(limit) = flags.limit {
        rows.truncate(limit as usize);
    }
    output(&rows, flags.format)
}

pub async fn persons(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rows = ctx.client.admin_persons().await?;
    if let Some(limit) = flags.limit {
        rows.truncate(limit as usize);
    }
    output(&rows, flags.format)
}
