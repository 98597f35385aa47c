use pricer_core::{Item, SortKey};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItemsCommands;
use crate::cli::subcommands::items::ItemsListArgs;
use crate::commands::shared::{query, session};
use crate::context::AppContext;
use crate::output::{Notice, output};

const NOTHING_LOADED: &str = "No items found or unable to load data.";

#[derive(Serialize)]
struct ItemsListResponse {
    category: String,
    sort: SortKey,
    count: usize,
    items: Vec<Item>,
}

/// Handle `pricer items <subcommand>`.
pub async fn handle(
    action: &ItemsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ItemsCommands::List(args) => list(args, ctx, flags).await,
    }
}

async fn list(args: &ItemsListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = session::require_session(ctx)?;
    let query = query::build_query(ctx, flags, args.category.as_deref(), args.sort, args.limit)?;

    let items = query::fetch_for_listing(ctx, &user.access_token, &query).await?;
    session::mark_active(ctx);

    if items.is_empty() {
        return output(&Notice::new(NOTHING_LOADED), flags.format);
    }

    output(
        &ItemsListResponse {
            category: query.category,
            sort: query.sort,
            count: items.len(),
            items,
        },
        flags.format,
    )
}
