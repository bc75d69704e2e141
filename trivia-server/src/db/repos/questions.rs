//! Question repository
//!
//! - list/search/filter: ordered by id so pages are stable
//! - search: ILIKE with escaped wildcards
//! - delete: DELETE ... RETURNING, so a concurrent second delete
//!   observes not-found instead of racing a prior SELECT

use sqlx::PgPool;

use super::DbError;
use crate::models::{CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every question.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Get a single question by id.
    pub async fn get(&self, id: QuestionId) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("question", id))
    }

    /// Case-insensitive substring search on question text.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(term.like_pattern())
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose category equals `category`.
    pub async fn list_for_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions eligible for the next quiz round.
    ///
    /// `category = None` draws from every category.
    pub async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Insert a question, returning the generated id.
    pub async fn create(&self, question: &NewQuestion) -> Result<QuestionId, DbError> {
        let (id,): (QuestionId,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.difficulty())
        .bind(question.category())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: QuestionId) -> Result<QuestionId, DbError> {
        let deleted: Option<(QuestionId,)> =
            sqlx::query_as("DELETE FROM questions WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        deleted
            .map(|(id,)| id)
            .ok_or_else(|| DbError::not_found("question", id))
    }
}
