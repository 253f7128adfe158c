pub mod accounts;
pub mod ask;

use axum::Json;
use serde_json::{Value, json};

/// GET / -> liveness probe with a human-readable banner.
pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "Student Assistant Backend with Gemini"
    }))
}
