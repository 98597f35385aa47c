use pricer_batch::{BatchResult, BatchUpdater};
use pricer_core::{PriceAdjustment, SortKey};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PricesCommands;
use crate::cli::subcommands::prices::PricesAdjustArgs;
use crate::commands::shared::{query, session};
use crate::context::AppContext;
use crate::output::{Notice, output};

const OUT_OF_RANGE: &str = "Percentage must be between 0 and 100.";
const NOTHING_TO_UPDATE: &str = "No items to update.";

#[derive(Serialize)]
struct PricesAdjustResponse {
    summary: String,
    category: String,
    #[serde(flatten)]
    result: BatchResult,
}

/// Handle `pricer prices <subcommand>`.
pub async fn handle(
    action: &PricesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PricesCommands::Adjust(args) => adjust(args, ctx, flags).await,
    }
}

async fn adjust(
    args: &PricesAdjustArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Reject before touching the session or the network.
    if PriceAdjustment::new(args.percentage).is_err() {
        anyhow::bail!(OUT_OF_RANGE);
    }

    let user = session::require_session(ctx)?;
    let query = query::build_query(
        ctx,
        flags,
        args.category.as_deref(),
        SortKey::PriceDesc,
        args.limit,
    )?;

    let mut items = query::fetch_or_empty(ctx, &user.access_token, &query).await?;
    if items.is_empty() {
        session::mark_active(ctx);
        return output(&Notice::new(NOTHING_TO_UPDATE), flags.format);
    }

    let updater = BatchUpdater::new(ctx.client.clone())
        .with_max_concurrency(ctx.config.batch.concurrency_limit());
    let result = updater
        .apply_percentage(&mut items, args.percentage, &user.access_token)
        .await?;
    session::mark_active(ctx);

    output(
        &PricesAdjustResponse {
            summary: result.summary(),
            category: query.category,
            result,
        },
        flags.format,
    )
}
