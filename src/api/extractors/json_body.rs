//! JSON body extractor that reports decode failures as validation errors.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an `AppError::Validation`.
///
/// Malformed JSON, a missing required field, a wrong field type or a
/// missing `Content-Type: application/json` all fail the request with
/// 400 instead of falling back to zero values.
///
/// # Example
///
/// ```rust,ignore
/// use user_registry::api::extractors::JsonBody;
/// use user_registry::domain::UserInput;
///
/// async fn create_user(JsonBody(input): JsonBody<UserInput>) {
///     // input.name and input.email are both present
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
