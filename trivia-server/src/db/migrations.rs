//! Schema migrations and default category seed

use sqlx::PgPool;

use super::DbError;
use crate::models::CategoryId;

/// Categories shipped with the stock trivia dataset
pub const DEFAULT_CATEGORIES: [(CategoryId, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Create tables if they do not exist.
///
/// `questions.category` is deliberately not a foreign key: the API
/// accepts any positive category id on insert.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            "type" TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            difficulty INTEGER NOT NULL,
            category INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions (category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`], skipping ids that already exist.
///
/// Returns the number of categories inserted.
pub async fn seed_default_categories(pool: &PgPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (id, kind) in DEFAULT_CATEGORIES {
        inserted += sqlx::query(
            r#"INSERT INTO categories (id, "type") VALUES ($1, $2) ON CONFLICT (id) DO NOTHING"#,
        )
        .bind(id)
        .bind(kind)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    // Explicit ids bypass the sequence; move it past them.
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(inserted, "Seeded default categories");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_ids_are_unique() {
        let mut ids: Vec<_> = DEFAULT_CATEGORIES.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEFAULT_CATEGORIES.len());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
        seed_default_categories(&pool).await.expect("seed");
        assert_eq!(seed_default_categories(&pool).await.expect("reseed"), 0);
    }
}
