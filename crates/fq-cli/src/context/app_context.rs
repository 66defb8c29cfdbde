use anyhow::Context;
use fq_client::FactsClient;
use fq_config::FqConfig;
use fq_session::SessionStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FqConfig,
    pub client: FactsClient,
    pub store: SessionStore,
}

impl AppContext {
    pub fn init(config: FqConfig) -> anyhow::Result<Self> {
        let client = FactsClient::new(&config.api).context("failed to build HTTP client")?;
        let store = SessionStore::resolve(config.session.explicit_path())?;
        tracing::debug!(session = %store.path().display(), "session store resolved");

        Ok(Self {
            config,
            client,
            store,
        })
    }
}
