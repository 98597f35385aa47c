use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, ItemsCommands, PricesCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in to the catalog and manage the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse catalog items.
    Items {
        #[command(subcommand)]
        action: ItemsCommands,
    },
    /// Bulk price operations.
    Prices {
        #[command(subcommand)]
        action: PricesCommands,
    },
}
