mod auth;
mod items;
mod prices;
mod shared;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Items { action } => items::handle(&action, ctx, flags).await,
        Commands::Prices { action } => prices::handle(&action, ctx, flags).await,
    }
}
