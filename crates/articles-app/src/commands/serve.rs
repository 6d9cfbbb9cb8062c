//! articles serve command

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use articles_adapter::{router, ApiToken, AppState};
use articles_shared::AppConfig;
use articles_usecase::ArticleService;
use clap::Args;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen address, overrides BIND_ADDR and the config file
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Create the articles table before accepting requests
    #[arg(long)]
    pub migrate: bool,
}

impl ServeCommand {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config =
            AppConfig::load(self.config.as_deref()).context("failed to load configuration")?;
        if let Some(bind) = self.bind {
            config = config.with_bind_addr(bind);
        }
        let bind_addr = config.bind_addr;
        info!(
            bind_addr = %bind_addr,
            max_connections = config.max_connections,
            "configuration loaded"
        );

        let store = super::connect(&config).await?;
        if self.migrate {
            store.migrate().await.context("failed to create articles table")?;
            info!("articles table is ready");
        }
        let pool = store.pool().clone();

        let service = ArticleService::new(Arc::new(store));
        let state = AppState::new(service, ApiToken::new(config.api_token));
        let app = router(state);

        let listener = TcpListener::bind(bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", bind_addr))?;
        info!(addr = %bind_addr, "listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server terminated")?;

        pool.close().await;
        info!("shut down");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
