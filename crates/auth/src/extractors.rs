//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AuthState;
use crate::verifier::Identity;

/// Extractor for the authenticated caller. Rejects with 401 if the
/// request carries no valid bearer token.
pub struct CurrentUser(pub Identity);

/// 401 rejection carrying a JSON error body.
pub struct AuthRejection(&'static str);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "error": self.0 })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthRejection("authorization header required"))?;

        let header = header
            .to_str()
            .map_err(|_| AuthRejection("invalid authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthRejection("authorization header must be a bearer token"))?;

        let identity = auth_state.verifier.verify(token).await.map_err(|err| {
            tracing::debug!(error = %err, "Token verification failed");
            AuthRejection("invalid access token")
        })?;

        Ok(CurrentUser(identity))
    }
}
