use pricer_core::FailureKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::UNREACHABLE;
use crate::context::AppContext;
use crate::output::output;

const INVALID_LOGIN: &str = "Invalid username or password. Please try again.";

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: u64,
    username: String,
    display_name: String,
    email: String,
    idle_timeout_mins: u64,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = match ctx.client.authenticate(&args.username, &args.password).await {
        Ok(Some(session)) => session,
        Ok(None) => anyhow::bail!(INVALID_LOGIN),
        Err(error) if error.kind() == FailureKind::NetworkFailure => {
            tracing::error!(%error, "login request failed");
            anyhow::bail!(UNREACHABLE)
        }
        Err(error) => return Err(anyhow::Error::new(error).context("auth login failed")),
    };

    ctx.sessions.save(&session)?;
    tracing::info!(username = %session.username, "logged in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: session.id,
            display_name: session.display_name(),
            username: session.username,
            email: session.email,
            idle_timeout_mins: ctx.config.session.idle_timeout_mins,
        },
        flags.format,
    )
}
