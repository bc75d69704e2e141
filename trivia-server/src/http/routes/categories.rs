//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::CategoryMap;

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
    pub message: &'static str,
}

/// GET /categories - all categories as an id -> type map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.list_categories().await?;

    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().collect(),
        message: "success",
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::db::MemoryStore;
    use crate::http::testing::{app, send};

    #[tokio::test]
    async fn lists_categories_as_map() {
        let app = app(&MemoryStore::with_default_categories());
        let (status, body) = send(&app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "success");
        assert_eq!(body["categories"]["1"], json!("Science"));
        assert_eq!(body["categories"]["6"], json!("Sports"));
        assert_eq!(body["categories"].as_object().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn empty_store_has_empty_map() {
        let app = app(&MemoryStore::new());
        let (status, body) = send(&app, Method::GET, "/categories", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"], json!({}));
    }
}
