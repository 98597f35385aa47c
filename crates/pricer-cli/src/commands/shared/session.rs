use pricer_core::UserSession;

use crate::context::AppContext;

/// Load the active session, failing with a login hint when there is none.
pub fn require_session(ctx: &AppContext) -> anyhow::Result<UserSession> {
    ctx.sessions
        .load(ctx.config.session.idle_timeout())?
        .map(|stored| stored.session)
        .ok_or_else(|| {
            anyhow::anyhow!("not logged in (or session expired). Run 'pricer auth login' first.")
        })
}

/// Refresh the idle window after a successful authenticated call.
pub fn mark_active(ctx: &AppContext) {
    if let Err(error) = ctx.sessions.touch() {
        tracing::warn!(%error, "failed to refresh session activity");
    }
}
