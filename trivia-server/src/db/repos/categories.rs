//! Category repository (read-only)

use sqlx::PgPool;

use super::DbError;
use crate::models::{Category, CategoryId};

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT id, "type" FROM categories ORDER BY id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: CategoryId) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }
}
