//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{Question, QuizRequest};

/// Next quiz question; `None` once the round is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub message: &'static str,
    pub question: Option<Question>,
}

/// POST /quizzes - random question not yet seen in this round
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.category_filter();
    if let Some(id) = category {
        state.store.get_category(id).await?;
    }

    let candidates = state
        .store
        .quiz_candidates(category, &req.previous_questions)
        .await?;
    let question = candidates.choose(&mut rand::thread_rng()).cloned();

    tracing::debug!(
        ?category,
        remaining = candidates.len(),
        "Quiz question drawn"
    );

    Ok(Json(QuizResponse {
        message: "success",
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
