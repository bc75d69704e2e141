//! Database layer - connection pool, repositories and the store seam
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - One query per operation, each its own implicit transaction
//! - Deletes use RETURNING, no check-then-delete
//! - Handlers only see [`TriviaStore`], never the pool

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use migrations::DEFAULT_CATEGORIES;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use store::{PgStore, TriviaStore};
