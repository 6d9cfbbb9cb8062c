//! # articles - Articles HTTP service
//!
//! Usage:
//!   articles serve [--config <file>] [--bind <addr>] [--migrate]
//!   articles migrate [--config <file>]
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  main.rs - CLI parsing, logging, config                   │
//! │    │                                                      │
//! │    ├── serve:   PgArticlesStore -> ArticleService -> axum │
//! │    └── migrate: PgArticlesStore::migrate                  │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod commands;

use clap::{Parser, Subcommand};
use commands::{MigrateCommand, ServeCommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "articles")]
#[command(about = "Articles - JSON CRUD service backed by PostgreSQL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),
    /// Create the articles table and exit
    Migrate(MigrateCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(cmd) => cmd.run().await,
        Commands::Migrate(cmd) => cmd.run().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "articles",
            "serve",
            "--config",
            "articles.yaml",
            "--bind",
            "127.0.0.1:3000",
            "--migrate",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve(cmd) => {
                assert_eq!(cmd.config, Some(PathBuf::from("articles.yaml")));
                assert_eq!(cmd.bind, Some("127.0.0.1:3000".parse().unwrap()));
                assert!(cmd.migrate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["articles", "serve"]).unwrap();

        match cli.command {
            Commands::Serve(cmd) => {
                assert!(cmd.config.is_none());
                assert!(cmd.bind.is_none());
                assert!(!cmd.migrate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate() {
        let cli = Cli::try_parse_from(["articles", "migrate", "-c", "prod.yaml"]).unwrap();

        match cli.command {
            Commands::Migrate(cmd) => {
                assert_eq!(cmd.config, Some(PathBuf::from("prod.yaml")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        assert!(Cli::try_parse_from(["articles", "serve", "--bind", "not-an-addr"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["articles"]).is_err());
    }
}
