//! In-memory store
//!
//! Same semantics as [`PgStore`](super::PgStore): ids are generated
//! monotonically and never reused, lists are ordered by id. Data is
//! lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::migrations::DEFAULT_CATEGORIES;
use super::repos::DbError;
use super::store::TriviaStore;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
    last_id: QuestionId,
}

/// In-memory storage backend for tests and database-less runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..Tables::default()
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Store seeded with [`DEFAULT_CATEGORIES`].
    pub fn with_default_categories() -> Self {
        Self::with_categories(DEFAULT_CATEGORIES.iter().map(|(id, kind)| Category {
            id: *id,
            kind: (*kind).to_owned(),
        }))
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.values().cloned().collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, DbError> {
        let tables = self.tables.read().await;
        tables
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, DbError> {
        let tables = self.tables.read().await;
        tables
            .categories
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("category", id))
    }

    async fn search_questions(&self, term: Option<&SearchTerm>) -> Result<Vec<Question>, DbError> {
        let Some(term) = term else {
            return Ok(Vec::new());
        };
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| term.matches(&q.question))
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<QuestionId, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_id += 1;
        let id = tables.last_id;
        tables
            .questions
            .insert(id, question.clone().into_question(id));
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, DbError> {
        let mut tables = self.tables.write().await;
        tables
            .questions
            .remove(&id)
            .map(|q| q.id)
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}
