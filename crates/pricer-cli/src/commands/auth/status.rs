use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    username: Option<String>,
    display_name: Option<String>,
    last_active: Option<String>,
    expires_at: Option<String>,
    note: Option<String>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idle_timeout = ctx.config.session.idle_timeout();

    let status = match ctx.sessions.load(idle_timeout)? {
        Some(stored) => AuthStatusResponse {
            authenticated: true,
            display_name: Some(stored.session.display_name()),
            username: Some(stored.session.username.clone()),
            last_active: Some(stored.last_active.to_rfc3339()),
            expires_at: stored.expires_at(idle_timeout).map(|at| at.to_rfc3339()),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            username: None,
            display_name: None,
            last_active: None,
            expires_at: None,
            note: Some("not logged in".into()),
        },
    };

    output(&status, flags.format)
}
