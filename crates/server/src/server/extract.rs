use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{async_trait, Json};
use serde::de::DeserializeOwned;

use crate::error::{RequestError, ValidationError};

/// A JSON body that may be left out entirely.
///
/// Only a request with no `Content-Type` and an empty body counts as absent,
/// anything else has to be valid JSON for `T`.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = RequestError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if request.headers().contains_key(CONTENT_TYPE) {
            let Json(payload) = Json::<T>::from_request(request, state).await?;
            return Ok(Self(Some(payload)));
        }
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
        if bytes.is_empty() {
            return Ok(Self(None));
        }
        Err(ValidationError::MalformedBody(
            "Expected request with `Content-Type: application/json`".to_string(),
        )
        .into())
    }
}
