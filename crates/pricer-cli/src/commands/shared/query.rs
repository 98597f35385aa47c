use pricer_catalog::{CatalogError, ItemQuery};
use pricer_core::{FailureKind, Item, SortKey};

use super::UNREACHABLE;
use super::limit::{effective_limit, query_limit};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

type Fetched = Result<Vec<Item>, CatalogError>;

/// Build the query for a listing command, filling gaps from config.
pub fn build_query(
    ctx: &AppContext,
    flags: &GlobalFlags,
    category: Option<&str>,
    sort: SortKey,
    limit: Option<u32>,
) -> anyhow::Result<ItemQuery> {
    let general = &ctx.config.general;
    let category = category.unwrap_or(&general.default_category);
    let limit = effective_limit(limit, flags.limit, general.default_limit);
    Ok(ItemQuery::new(category, sort, query_limit(limit)?))
}

/// Fetch items for display. An unreachable catalog is an error; a rejected
/// or unreadable listing shows as empty.
pub async fn fetch_for_listing(
    ctx: &AppContext,
    token: &str,
    query: &ItemQuery,
) -> anyhow::Result<Vec<Item>> {
    require_reachable(ctx.client.fetch_filtered_items(token, query).await, query)
}

/// Fetch items to reprice; every remote or network failure degrades to an
/// empty set.
pub async fn fetch_or_empty(
    ctx: &AppContext,
    token: &str,
    query: &ItemQuery,
) -> anyhow::Result<Vec<Item>> {
    degrade_to_empty(ctx.client.fetch_filtered_items(token, query).await, query)
}

fn require_reachable(fetched: Fetched, query: &ItemQuery) -> anyhow::Result<Vec<Item>> {
    match fetched {
        Err(error) if error.kind() == FailureKind::NetworkFailure => {
            tracing::error!(%error, category = %query.category, "catalog unreachable");
            anyhow::bail!(UNREACHABLE)
        }
        other => degrade_to_empty(other, query),
    }
}

/// Invalid arguments (blank category, zero limit) are still raised.
fn degrade_to_empty(fetched: Fetched, query: &ItemQuery) -> anyhow::Result<Vec<Item>> {
    match fetched {
        Ok(items) => Ok(items),
        Err(error @ CatalogError::InvalidArgument(_)) => Err(error.into()),
        Err(error) => {
            tracing::warn!(
                %error,
                kind = %error.kind(),
                category = %query.category,
                "could not load items"
            );
            Ok(Vec::new())
        }
    }
}
