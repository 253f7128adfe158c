use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::router::AppState;

/// Ensure the inbound request carries the backend key in `x-api-key`.
/// The expected key lives in router state, injected at startup; comparison is
/// constant-time.
pub fn ensure_authorized(provided: Option<&str>, expected: &str) -> Result<(), ApiError> {
    let Some(provided) = provided else {
        return Err(ApiError::InvalidApiKey);
    };
    if bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        Err(ApiError::InvalidApiKey)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl<S> FromRequestParts<S> for RequireApiKey
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        let provided = parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok());
        ensure_authorized(provided, &app.backend_key)?;
        Ok(Self)
    }
}
