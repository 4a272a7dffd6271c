//! `AdminUser` extractor: Token Verifier followed by the Role Authorizer.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;

use goodies_entity::user::Identity;

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::AuthUser;

/// A verified caller whose stored role is `admin`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;

        if let Err(e) = state.role_authorizer.authorize(&identity).await {
            debug!(identity = %identity, kind = %e.kind, "Admin gate rejected request");
            return Err(e.into());
        }

        Ok(AdminUser(identity))
    }
}
