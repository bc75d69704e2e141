//! Command implementations for the trivia CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from flags/environment.
fn require_database_url(url: Option<String>) -> Result<String> {
    url.context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
}
