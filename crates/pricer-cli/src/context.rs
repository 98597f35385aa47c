use anyhow::Context;
use pricer_catalog::CatalogClient;
use pricer_config::PricerConfig;

use crate::session_store::SessionStore;

/// Everything a command handler needs, built once per invocation.
pub struct AppContext {
    pub config: PricerConfig,
    pub client: CatalogClient,
    pub sessions: SessionStore,
}

impl AppContext {
    pub fn init(config: PricerConfig) -> anyhow::Result<Self> {
        let client = CatalogClient::from_config(&config).context("failed to build catalog client")?;
        let sessions = SessionStore::at_default_path()?;
        tracing::debug!(
            base_url = config.catalog.normalized_base_url(),
            session_file = %sessions.path().display(),
            "pricer context ready"
        );
        Ok(Self {
            config,
            client,
            sessions,
        })
    }
}
