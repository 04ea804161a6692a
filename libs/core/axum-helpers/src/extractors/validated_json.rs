//! JSON extractor with validation through the `validator` crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs [`Validate`] before the handler sees the payload.
///
/// Deserialization failures become [`AppError::JsonExtractorRejection`]; rule failures
/// become [`AppError::ValidationError`] (400 with field → message details).
///
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::ValidatedJson;
///
/// async fn create(ValidatedJson(payload): ValidatedJson<UserDraft>) -> String {
///     payload.email
/// }
///
/// let app: Router = Router::new().route("/users", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;

        data.validate()?;

        Ok(ValidatedJson(data))
    }
}
