//! Runtime configuration resolved from [`ServerSettings`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use user_service::domain::ports::{FixtureUserStore, UserStore};
use user_service::outbound::fixture_file::load_fixture_store;
use user_service::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
use user_service::settings::ServerSettings;

/// Everything the listeners need, with the user store already connected.
pub struct ServerConfig {
    pub(crate) http_addr: SocketAddr,
    pub(crate) grpc_addr: SocketAddr,
    pub(crate) request_timeout: Duration,
    pub(crate) store: Arc<dyn UserStore>,
}

impl ServerConfig {
    /// Resolve settings into a runnable configuration.
    ///
    /// Uses PostgreSQL when a database URL is configured, otherwise the
    /// fixture store, seeded from `fixture_path` when one is given.
    ///
    /// # Errors
    ///
    /// Fails when the pool cannot be built or the fixture file cannot be read.
    pub async fn from_settings(settings: &ServerSettings) -> Result<Self> {
        let store: Arc<dyn UserStore> = match settings.database_url() {
            Some(url) => {
                let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
                let pool = DbPool::new(config)
                    .await
                    .wrap_err("failed to build database pool")?;
                info!(max_size = settings.pool_max_size(), "using PostgreSQL user store");
                Arc::new(DieselUserStore::new(pool))
            }
            None => Arc::new(fixture_store(settings)?),
        };

        Ok(Self {
            http_addr: settings.http_addr(),
            grpc_addr: settings.grpc_addr(),
            request_timeout: settings.request_timeout(),
            store,
        })
    }
}

fn fixture_store(settings: &ServerSettings) -> Result<FixtureUserStore> {
    match settings.fixture_path() {
        Some(path) => {
            let store = load_fixture_store(path)
                .wrap_err_with(|| format!("failed to load fixture users from {}", path.display()))?;
            warn!(
                path = %path.display(),
                users = store.len(),
                "no database configured; serving fixture users"
            );
            Ok(store)
        }
        None => {
            warn!("no database configured; serving an empty fixture store");
            Ok(FixtureUserStore::default())
        }
    }
}
