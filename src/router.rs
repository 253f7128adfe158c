use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::GeminiApi;
use crate::db::UserStorage;
use crate::handlers;
use crate::service::{AccountService, AnswerEngine};

/// Shared per-process state. The backend key and the optional Gemini key are
/// injected here at startup rather than read from globals at request time.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub engine: Arc<AnswerEngine>,
    pub backend_key: Arc<str>,
}

impl AppState {
    pub fn new(
        storage: UserStorage,
        client: reqwest::Client,
        backend_key: Arc<str>,
        gemini_key: Option<String>,
    ) -> Self {
        let gemini = gemini_key.map(|key| GeminiApi::new(client, key));
        Self::from_parts(storage, AnswerEngine::new(gemini), backend_key)
    }

    /// Assemble state from an already-built engine, e.g. one whose Gemini
    /// caller points at a stand-in endpoint.
    pub fn from_parts(storage: UserStorage, engine: AnswerEngine, backend_key: Arc<str>) -> Self {
        Self {
            accounts: AccountService::new(storage),
            engine: Arc::new(engine),
            backend_key,
        }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/signup", post(handlers::accounts::signup))
        .route("/login", post(handlers::accounts::login))
        .route("/ask", post(handlers::ask::ask))
        .with_state(state)
}
