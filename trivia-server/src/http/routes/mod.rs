//! Route handlers organized by resource

pub mod health;
pub mod categories;
pub mod questions;
pub mod quizzes;

use super::error::ApiError;

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for matched paths with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
