use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /signup?name=..&email=..&password=..
pub async fn signup(
    State(state): State<AppState>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .accounts
        .signup(&params.name, &params.email, &params.password)
        .await?;
    Ok(Json(MessageResponse { message }))
}

/// POST /login?email=..&password=..
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state.accounts.login(&params.email, &params.password).await?;
    Ok(Json(MessageResponse { message }))
}
