//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Integer id from the path.
///
/// A non-numeric id cannot name an existing row, so it is reported as
/// not found rather than as a bad request.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| ApiError::NotFound {
                resource: "resource",
                id: raw,
            })
    }
}

/// JSON body whose rejections render as [`ApiError`].
///
/// Type mismatches in otherwise valid JSON become 422; missing or
/// malformed bodies become 400.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::Unprocessable {
                message: e.body_text(),
            }),
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
            }),
        }
    }
}
