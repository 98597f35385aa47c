//! File-backed session storage with idle expiry.
//!
//! One session lives at `~/.pricer/session.json` (0600 on Unix) together with
//! the time it was last used. A session idle for longer than the configured
//! timeout is deleted on load, so the caller sees "not logged in".

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use pricer_core::UserSession;
use serde::{Deserialize, Serialize};

const SESSION_DIR: &str = ".pricer";
const SESSION_FILE_NAME: &str = "session.json";

/// What is persisted on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredSession {
    pub session: UserSession,
    pub last_active: DateTime<Utc>,
}

impl StoredSession {
    /// When this session will expire if left unused.
    #[must_use]
    pub fn expires_at(&self, idle_timeout: Duration) -> Option<DateTime<Utc>> {
        chrono::TimeDelta::from_std(idle_timeout)
            .ok()
            .and_then(|idle| self.last_active.checked_add_signed(idle))
    }

    fn is_expired(&self, idle_timeout: Duration, now: DateTime<Utc>) -> bool {
        (now - self.last_active)
            .to_std()
            .is_ok_and(|idle| idle > idle_timeout)
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted at `~/.pricer/session.json`.
    pub fn at_default_path() -> anyhow::Result<Self> {
        let home = dirs::home_dir().context("home directory not found; cannot store session")?;
        Ok(Self::new(home.join(SESSION_DIR).join(SESSION_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `session` as freshly active.
    pub fn save(&self, session: &UserSession) -> anyhow::Result<()> {
        self.save_at(session, Utc::now())
    }

    fn save_at(&self, session: &UserSession, now: DateTime<Utc>) -> anyhow::Result<()> {
        let stored = StoredSession {
            session: session.clone(),
            last_active: now,
        };
        self.write(&stored)
    }

    /// Load the stored session unless it is missing or idle-expired.
    pub fn load(&self, idle_timeout: Duration) -> anyhow::Result<Option<StoredSession>> {
        self.load_at(idle_timeout, Utc::now())
    }

    fn load_at(
        &self,
        idle_timeout: Duration,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<StoredSession>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let stored: StoredSession = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %self.path.display(),
                    "discarding unreadable session file"
                );
                self.clear()?;
                return Ok(None);
            }
        };

        if stored.is_expired(idle_timeout, now) {
            tracing::info!(
                username = %stored.session.username,
                "session expired after inactivity"
            );
            self.clear()?;
            return Ok(None);
        }

        Ok(Some(stored))
    }

    /// Mark the stored session as used now. No-op when nothing is stored.
    pub fn touch(&self) -> anyhow::Result<()> {
        self.touch_at(Utc::now())
    }

    fn touch_at(&self, now: DateTime<Utc>) -> anyhow::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let mut stored: StoredSession = serde_json::from_str(&raw)
            .with_context(|| format!("parse {}", self.path.display()))?;
        stored.last_active = now;
        self.write(&stored)
    }

    /// Delete the stored session. Returns whether anything was removed.
    pub fn clear(&self) -> anyhow::Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)
            .with_context(|| format!("failed to delete {}", self.path.display()))?;
        Ok(true)
    }

    fn write(&self, stored: &StoredSession) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(stored)?;
        fs::write(&self.path, body).with_context(|| format!("write {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .with_context(|| format!("chmod {}", self.path.display()))?;
        }

        Ok(())
    }
}
