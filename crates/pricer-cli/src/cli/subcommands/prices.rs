use clap::{Args, Subcommand};

/// Price commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PricesCommands {
    /// Raise every listed item's price by a percentage.
    Adjust(PricesAdjustArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PricesAdjustArgs {
    /// Percentage increase, 0 to 100.
    #[arg(long, allow_negative_numbers = true)]
    pub percentage: f64,
    /// Category to adjust (defaults to `general.default_category`).
    #[arg(long)]
    pub category: Option<String>,
    /// Number of highest-priced items to adjust.
    #[arg(long)]
    pub limit: Option<u32>,
}
