use clap::{Args, Subcommand};
use pricer_core::SortKey;

/// Item listing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemsCommands {
    /// List items of one category, sorted and truncated.
    List(ItemsListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ItemsListArgs {
    /// Category to list (defaults to `general.default_category`).
    #[arg(long)]
    pub category: Option<String>,
    /// Sort order: price-desc, price-asc, title.
    #[arg(long, default_value = "price-desc")]
    pub sort: SortKey,
    /// Max items to return.
    #[arg(long)]
    pub limit: Option<u32>,
}
