use axum::{Json, extract::State};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::RequireApiKey;
use crate::router::AppState;
use crate::service::Answer;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub use_llm: bool,
}

/// POST /ask
///
/// The key check runs before the body is read, so a bad `x-api-key` yields
/// 401 even for requests that would otherwise fail validation.
pub async fn ask(
    State(state): State<AppState>,
    _auth: RequireApiKey,
    Json(query): Json<AskRequest>,
) -> Result<Json<Answer>, ApiError> {
    if query.question.trim().is_empty() {
        return Err(ApiError::EmptyQuestion);
    }
    Ok(Json(state.engine.answer(&query.question, query.use_llm).await))
}
