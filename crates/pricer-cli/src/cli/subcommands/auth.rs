use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username and password.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show the stored session and when it expires.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Catalog username.
    #[arg(long)]
    pub username: String,
    /// Catalog password.
    #[arg(long, env = "PRICER_PASSWORD", hide_env_values = true)]
    pub password: String,
}
