//! Custom Axum extractors
//!
//! Both reject with `ServerError`, keeping malformed ids and bodies on the
//! same JSON error shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ServerError;

/// Extract and validate a numeric todo id from path
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ServerError::BadRequest("missing id path parameter".to_string()))?;

        let id = raw
            .parse::<i64>()
            .map_err(|_| ServerError::BadRequest(format!("invalid todo id '{raw}'")))?;

        Ok(Self(id))
    }
}

/// JSON request body with a JSON-shaped rejection
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}
