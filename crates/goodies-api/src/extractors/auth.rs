//! `AuthUser` extractor: the Token Verifier gate.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use goodies_entity::user::Identity;

use crate::error::ApiError;
use crate::state::AppState;

/// The verified identity of the caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

/// Raw `Authorization` header value.
///
/// A header that is present but not valid UTF-8 reads as empty, so it fails
/// verification instead of counting as absent.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or(""))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = state.jwt_decoder.verify(authorization_header(&parts.headers))?;
        Ok(AuthUser(identity))
    }
}
