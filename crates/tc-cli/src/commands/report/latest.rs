use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Landing-surface read: degrade to an empty list instead of failing.
    let mut reports = match ctx.client.latest_reports().await {
        Ok(reports) => reports,
        Err(error) => {
            tracing::warn!(%error, "latest reports unavailable");
            Vec::new()
        }
    };

    let limit = limit
        .or(flags.limit)
        .unwrap_or(ctx.config.general.default_limit) as usize;
    reports.truncate(limit);

    output(&reports, flags.format)
}
