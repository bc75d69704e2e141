//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool_with_options, migrations, DEFAULT_MAX_CONNECTIONS};
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig, TriviaStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (ignored with --in-memory)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[arg(long, env = "TRIVIA_REQUEST_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Run migrations before serving
    #[arg(long)]
    pub migrate: bool,

    /// Serve from an in-memory store seeded with the default categories
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        Arc::new(MemoryStore::with_default_categories())
    } else {
        let database_url = super::require_database_url(args.database_url)?;
        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if args.migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        Arc::new(PgStore::new(pool))
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
