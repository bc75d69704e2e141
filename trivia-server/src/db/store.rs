//! Storage seam used by the HTTP handlers

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{CategoryRepo, DbError, QuestionRepo};
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

/// Every storage operation the API performs.
///
/// Implementations must be cheap to share behind an `Arc`; each call
/// is an independent unit of work.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions, in a stable order.
    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    async fn get_question(&self, id: QuestionId) -> Result<Question, DbError>;

    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError>;

    /// Case-insensitive substring search. `None` yields no questions.
    async fn search_questions(&self, term: Option<&SearchTerm>) -> Result<Vec<Question>, DbError>;

    /// Exact match on the category reference.
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError>;

    /// Persist a question and return its generated id.
    async fn insert_question(&self, question: &NewQuestion) -> Result<QuestionId, DbError>;

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, DbError>;

    /// Questions in `category` (all when `None`) not listed in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn search_questions(&self, term: Option<&SearchTerm>) -> Result<Vec<Question>, DbError> {
        match term {
            Some(term) => QuestionRepo::new(&self.pool).search(term).await,
            None => Ok(Vec::new()),
        }
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_category(category).await
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<QuestionId, DbError> {
        QuestionRepo::new(&self.pool).create(question).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(category, exclude)
            .await
    }
}
