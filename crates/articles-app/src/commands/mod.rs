//! CLI Commands

pub mod migrate;
pub mod serve;

pub use migrate::MigrateCommand;
pub use serve::ServeCommand;

use anyhow::Context;
use articles_adapter::PgArticlesStore;
use articles_shared::AppConfig;
use secrecy::ExposeSecret;

/// Open the connection pool described by `config`
async fn connect(config: &AppConfig) -> anyhow::Result<PgArticlesStore> {
    let store = PgArticlesStore::connect(config.database_url.expose_secret(), config.max_connections)
        .await
        .context("failed to connect to database")?;
    tracing::info!(max_connections = config.max_connections, "connected to database");
    Ok(store)
}
