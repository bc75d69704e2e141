//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, IdPath};
use crate::http::server::AppState;
use crate::models::{
    CategoryId, CategoryMap, CreateQuestionRequest, NewQuestion, PageParams, Pagination, Question,
    QuestionId, SearchTerm,
};

/// Question list response shared by listing, search and category filter
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub message: &'static str,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Only present on the paginated listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<CategoryId>,
}

/// Single question response
#[derive(Serialize)]
pub struct QuestionResponse {
    pub message: &'static str,
    pub question: Question,
}

/// Creation response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub question: QuestionId,
}

/// Deletion response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub deleted: QuestionId,
}

/// Search request
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: Option<String>,
}

/// GET /questions?page=N - paginated listing with the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let page = Pagination::from(params);
    let questions = state.store.list_questions().await?;
    let categories = state.store.list_categories().await?;

    Ok(Json(QuestionsResponse {
        message: "success",
        questions: page.slice(&questions).to_vec(),
        total_questions: questions.len(),
        categories: Some(categories.into_iter().collect()),
        current_category: None,
    }))
}

/// GET /questions/{id} - get a single question
async fn get_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.store.get_question(id).await?;

    Ok(Json(QuestionResponse {
        message: "success",
        question,
    }))
}

/// POST /questions - create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let question = NewQuestion::try_from(req)?;
    let id = state.store.insert_question(&question).await?;
    tracing::info!(id, category = question.category(), "Question created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "success",
            question: id,
        }),
    ))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.store.delete_question(id).await?;
    tracing::info!(id = deleted, "Question deleted");

    Ok(Json(DeletedResponse {
        message: "success",
        deleted,
    }))
}

/// POST /questions/search - case-insensitive search, not paginated
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let term = SearchTerm::parse(req.search_term.as_deref())?;
    let questions = state.store.search_questions(term.as_ref()).await?;
    tracing::debug!(term = ?term.as_ref().map(SearchTerm::as_str), hits = questions.len(), "Search");

    Ok(Json(QuestionsResponse {
        message: "success",
        total_questions: questions.len(),
        questions,
        categories: None,
        current_category: None,
    }))
}

/// GET /categories/{id}/questions - questions in one category, not paginated
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    IdPath(category_id): IdPath,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let category = state.store.get_category(category_id).await?;
    let questions = state.store.questions_in_category(category.id).await?;

    Ok(Json(QuestionsResponse {
        message: "success",
        total_questions: questions.len(),
        questions,
        categories: None,
        current_category: Some(category.id),
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", get(get_question).delete(delete_question))
        .route("/categories/{id}/questions", get(list_category_questions))
}
