use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::common::response::ApiError;

/// JSON body that has passed its `validator` rules. Malformed bodies, missing
/// fields and rule violations are all rejected with 400.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(rejection.body_text(), StatusCode::BAD_REQUEST))?;

        value
            .validate()
            .map_err(|errors| ApiError(errors.to_string(), StatusCode::BAD_REQUEST))?;

        Ok(Self(value))
    }
}
