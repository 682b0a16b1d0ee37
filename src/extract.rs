// Request extractors shared by all handlers

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ErrorCode};

/// JSON body extractor whose rejection uses the API error body
/// (`MalformedRequest`) instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::with_source(ErrorCode::MalformedRequest, rejection)),
        }
    }
}

/// Parse a path segment as a row id, mapping failure to `err`
pub fn parse_id<E>(raw: &str, err: impl FnOnce() -> E) -> Result<i32, E> {
    raw.parse::<i32>().map_err(|_| err())
}
