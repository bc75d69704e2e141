//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Insert the default categories (existing ids are left untouched)
    #[arg(long)]
    pub seed: bool,
}

/// Create tables and optionally seed categories
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = super::require_database_url(args.database_url)?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    if args.seed {
        let inserted = migrations::seed_default_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        println!("Seeded {} categories", inserted);
    }

    println!("Migrations complete");
    Ok(())
}
