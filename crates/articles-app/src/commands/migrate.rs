//! articles migrate command

use std::path::PathBuf;

use anyhow::Context;
use articles_shared::AppConfig;
use clap::Args;

#[derive(Debug, Args)]
pub struct MigrateCommand {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl MigrateCommand {
    pub async fn run(self) -> anyhow::Result<()> {
        let config =
            AppConfig::load(self.config.as_deref()).context("failed to load configuration")?;

        let store = super::connect(&config).await?;
        store.migrate().await.context("failed to create articles table")?;
        tracing::info!("articles table is ready");

        store.pool().close().await;
        Ok(())
    }
}
