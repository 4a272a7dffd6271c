//! `JsonBody` extractor: a JSON request body that may be left out.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use goodies_core::error::AppError;

use crate::error::ApiError;

/// JSON body parsed regardless of `Content-Type`.
///
/// An empty or whitespace-only body yields `T::default()`; anything else
/// must be valid JSON for `T` or the request fails with 400.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("Failed to read request body: {e}")))?;

        parse(&bytes).map(JsonBody).map_err(ApiError::from)
    }
}

fn parse<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, "Request body rejected");
        AppError::validation(format!("Invalid JSON body: {e}"))
    })
}
