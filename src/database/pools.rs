use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tracing::info;

use crate::config::{AppConfig, PoolConfig, StoreConfig};

/// Shared application state: one pool per backing store.
///
/// The warehouse pool serves the query proxy and schema introspection; the
/// tracker pool serves accounts and activity logging. Both are created
/// lazily, so construction never touches the network.
#[derive(Clone)]
pub struct AppState {
    pub warehouse: PgPool,
    pub tracker: PgPool,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let state = Self {
            warehouse: build_pool(&config.warehouse, &config.pool),
            tracker: build_pool(&config.tracker, &config.pool),
        };
        info!(
            "Created pools for warehouse {}:{}/{} and tracker {}:{}/{}",
            config.warehouse.host,
            config.warehouse.port,
            config.warehouse.database,
            config.tracker.host,
            config.tracker.port,
            config.tracker.database,
        );
        state
    }

    /// Pings the warehouse pool to ensure connectivity.
    pub async fn probe_warehouse(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.warehouse).await?;
        Ok(())
    }
}

fn build_pool(store: &StoreConfig, pool: &PoolConfig) -> PgPool {
    // `Prefer` negotiates TLS when the server offers it without verifying the
    // certificate chain, so self-signed certs are accepted.
    let options = PgConnectOptions::new()
        .host(&store.host)
        .port(store.port)
        .database(&store.database)
        .username(&store.user)
        .password(&store.password)
        .ssl_mode(PgSslMode::Prefer);

    PgPoolOptions::new()
        .max_connections(pool.max_connections)
        .acquire_timeout(Duration::from_secs(pool.acquire_timeout_secs))
        .connect_lazy_with(options)
}
