//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the store answered a trivial read
    pub storage: bool,
}

/// GET /health - 503 when the store cannot be read
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.store.list_categories().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: storage unavailable");
            false
        }
    };

    let (code, status) = if storage {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            storage,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::{Method, StatusCode};

    use crate::db::{DbError, MemoryStore, TriviaStore};
    use crate::http::testing::{app, app_with, send};
    use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchTerm};

    /// Store whose every call fails as if the pool were exhausted.
    struct UnreachableStore;

    fn unreachable() -> DbError {
        DbError::Sqlx(sqlx::Error::PoolTimedOut)
    }

    #[async_trait]
    impl TriviaStore for UnreachableStore {
        async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
            Err(unreachable())
        }

        async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
            Err(unreachable())
        }

        async fn get_question(&self, _id: QuestionId) -> Result<Question, DbError> {
            Err(unreachable())
        }

        async fn get_category(&self, _id: CategoryId) -> Result<Category, DbError> {
            Err(unreachable())
        }

        async fn search_questions(&self, _term: Option<&SearchTerm>) -> Result<Vec<Question>, DbError> {
            Err(unreachable())
        }

        async fn questions_in_category(&self, _category: CategoryId) -> Result<Vec<Question>, DbError> {
            Err(unreachable())
        }

        async fn insert_question(&self, _question: &NewQuestion) -> Result<QuestionId, DbError> {
            Err(unreachable())
        }

        async fn delete_question(&self, _id: QuestionId) -> Result<QuestionId, DbError> {
            Err(unreachable())
        }

        async fn quiz_candidates(
            &self,
            _category: Option<CategoryId>,
            _exclude: &[QuestionId],
        ) -> Result<Vec<Question>, DbError> {
            Err(unreachable())
        }
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app(&MemoryStore::new());
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], true);
    }

    #[tokio::test]
    async fn health_degrades_when_storage_fails() {
        let app = app_with(Arc::new(UnreachableStore));
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["storage"], false);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn storage_failure_elsewhere_is_json_500() {
        let app = app_with(Arc::new(UnreachableStore));
        let (status, body) = send(&app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 500);
    }
}
