//! trivia-server: JSON API for trivia questions and categories
//!
//! Lists, paginates, searches and filters questions, creates and
//! deletes them, and serves random quiz questions. Storage is
//! abstracted behind [`db::TriviaStore`] so the same router runs on
//! PostgreSQL or in memory.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError, MemoryStore, PgStore, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
